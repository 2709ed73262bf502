//! Aula Theme SDK
//!
//! Types, traits, and host collaborator bindings shared between the Aula
//! theme kernel and contributor plugins. Plugins depend on this crate only;
//! the kernel registers their contributor instances at startup.

pub mod context;
pub mod contributor;
pub mod host;
pub mod tree;
pub mod types;
pub mod url;

pub mod prelude {
    pub use crate::context::{ProfileContext, RenderContext};
    pub use crate::contributor::{FooterHook, ProfileContributor};
    pub use crate::host::{
        CapabilityChecker, CapabilityScope, ConfigStore, ImageStore, ProfileDataProvider,
        StringResolver, caps,
    };
    pub use crate::tree::{Category, Icon, Node, Tree};
    pub use crate::types::*;
    pub use crate::url::PageUrl;
}

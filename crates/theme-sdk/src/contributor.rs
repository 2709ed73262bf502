//! Contributor traits implemented by subsystems and plugins.
//!
//! Rather than scanning installed components for hook functions at render
//! time, the kernel collects contributor instances into an explicit registry
//! at startup. Each contributor is tagged with its owning component (and
//! optional module) so the display filter can gate it without invoking it.

use crate::context::{ProfileContext, RenderContext};
use crate::tree::Tree;

/// A profile navigation contributor.
///
/// Contributors must tolerate running in any order relative to each other;
/// only the built-in core contributor is guaranteed to run first. A
/// contributor that finds nothing to add simply adds nothing.
pub trait ProfileContributor {
    /// Owning component name (e.g. `badges`, `report`, `mod`).
    fn component(&self) -> &str;

    /// Module name for sub-component plugins (e.g. `forum` under `mod`).
    fn module(&self) -> Option<&str> {
        None
    }

    /// Add categories and nodes for the subject user.
    fn navigation(&self, tree: &mut Tree, ctx: &ProfileContext<'_>);
}

/// A footer fragment contributor.
///
/// Fragments are collected in registration order and rendered as a list in
/// the page footer. Returning `None` contributes nothing for this render.
pub trait FooterHook {
    /// Owning component name.
    fn component(&self) -> &str;

    /// Produce a footer fragment for this render pass.
    fn footer_fragment(&self, render: &RenderContext) -> Option<String>;
}

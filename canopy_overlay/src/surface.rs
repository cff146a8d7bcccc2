// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering-surface capability trait the visibility machine consumes.
//!
//! A [`Surface`] is the complete set of operations the state machine needs
//! from a concrete UI binding: class and attribute mutation, style
//! application, geometry queries, and document-level event subscriptions.
//! Implementations are expected to be synchronous and infallible; geometry
//! queries return an explicit absence ([`Surface::anchor_rect`]) rather than
//! failing.
//!
//! Document subscriptions are explicit handles: [`Surface::subscribe_document`]
//! issues a [`Subscription`] and the machine returns it through
//! [`Surface::unsubscribe_document`] exactly once per show/hide cycle. The
//! surface routes the subscribed events back to whatever owns the machine
//! (see `canopy_interaction` for the handler entry points).

use alloc::string::String;

use kurbo::{Rect, Size};

/// Document-level event sources an overlay subscribes to while shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentEvent {
    /// A pointer click anywhere in the document (outside-click dismissal).
    Click,
    /// A key press anywhere in the document (escape dismissal).
    KeyDown,
}

/// Opaque handle for one document event subscription.
///
/// Issued by the surface on subscribe and handed back on unsubscribe; the
/// machine never inspects the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);

/// Capability set a concrete UI binding provides to the visibility machine.
pub trait Surface {
    /// Returns the current value of an attribute on the overlay, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Sets an attribute on the overlay.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Adds a class token to the overlay.
    fn add_class(&mut self, token: &str);

    /// Removes a class token from the overlay.
    fn remove_class(&mut self, token: &str);

    /// Returns whether the overlay currently carries a class token.
    fn has_class(&self, token: &str) -> bool;

    /// Sets an inline style property on the overlay.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Returns the size of the viewport the overlay must stay within.
    fn viewport_size(&self) -> Size;

    /// Returns the rendered size of the overlay itself.
    fn overlay_size(&self) -> Size;

    /// Returns a fresh snapshot of the anchor's bounding rectangle, or
    /// `None` when the anchor cannot be resolved.
    fn anchor_rect(&self) -> Option<Rect>;

    /// Returns whether the surrounding layout is right-to-left.
    fn is_right_to_left(&self) -> bool;

    /// Subscribes to a document-level event source, returning the handle to
    /// release it with.
    fn subscribe_document(&mut self, event: DocumentEvent) -> Subscription;

    /// Releases a subscription previously issued by
    /// [`subscribe_document`](Self::subscribe_document).
    fn unsubscribe_document(&mut self, subscription: Subscription);

    /// Notifies the owning collaborator that a hide cycle fully completed.
    fn notify_hidden(&mut self);
}

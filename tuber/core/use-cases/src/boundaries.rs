use ::async_trait::async_trait;

use crate::models::events::CreateNoteEvent;
use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedString;

#[async_trait]
pub trait Accept<Request>: ::core::marker::Send + ::core::marker::Sync {
    async fn accept(self: ::std::sync::Arc<Self>, request: Request) -> Fallible<()>;
}

#[async_trait]
pub trait Activate: ::core::marker::Send + ::core::marker::Sync {
    async fn activate(self: ::std::sync::Arc<Self>) -> Fallible<()>;
    async fn deactivate(self: ::std::sync::Arc<Self>) -> Fallible<()>;
}

#[async_trait]
pub trait Update<Event>: ::core::marker::Send + ::core::marker::Sync {
    async fn update(self: ::std::sync::Arc<Self>, event: &Event) -> Fallible<()>;
}

#[derive(Debug, Clone, ::bon::Builder)]
#[builder(on(_, into))]
pub struct CreateNoteRequestModel {
    pub url: MaybeOwnedString,

    /// Name of a preset from [`::domain::RESOLUTIONS`].
    pub resolution: MaybeOwnedString,
}

pub trait CreateNoteOutputBoundary: Activate + Update<CreateNoteEvent> {}

impl<View> CreateNoteOutputBoundary for View where View: Activate + Update<CreateNoteEvent> {}

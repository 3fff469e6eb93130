//! Ads report form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export the component and its `Msg`.
//! - Delegate `update` and `view` to their modules; all decisions about what
//!   to send and what to show are taken by `common::controller`.

use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod pagination;
mod state;
mod table;
mod update;
mod view;

pub use messages::Msg;
pub use state::ReportComponent;

impl Component for ReportComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ReportComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

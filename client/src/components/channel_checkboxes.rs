//! One checkbox per delivery channel of a `ChannelSet`'s universe.

use leptos::prelude::*;

use crate::state::channels::{Channel, ChannelSet};

/// Checked state mirrors `contains`; each change toggles exactly that flag.
#[component]
pub fn ChannelCheckboxes(
    #[prop(into)] value: Signal<ChannelSet>,
    on_toggle: Callback<Channel>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let universe = value.get_untracked().universe();

    view! {
        <fieldset class="channel-checkboxes">
            <legend>"Canal de envío"</legend>
            {universe
                .channels()
                .iter()
                .map(|&channel| {
                    view! {
                        <label class="channel-checkboxes__option">
                            <input
                                type="checkbox"
                                prop:checked=move || value.get().contains(channel)
                                disabled=move || disabled.get()
                                on:change=move |_| on_toggle.run(channel)
                            />
                            {channel.label()}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

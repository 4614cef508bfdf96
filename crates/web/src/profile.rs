use leptos::prelude::*;
use maison::{
    i18n::Language,
    loyalty::{LoyaltyAccount, Reward, Tier},
    menu::Favorites,
};

use crate::{
    context::{Screen, use_app},
    menu::BackButton,
};

#[component]
pub(crate) fn ProfileScreen() -> impl IntoView {
    let app = use_app();
    let favorites = move || app.favorites.with(Favorites::len);

    view! {
        <section class="screen profile-screen">
            <header class="screen-header">
                <h1 class="screen-title">{move || app.text(|catalog| &catalog.profile.title)}</h1>
            </header>
            <div class="profile-card">
                <p class="profile-name">{move || app.text(|catalog| &catalog.profile.guest)}</p>
                <p class="profile-hint">{move || app.text(|catalog| &catalog.profile.guest_hint)}</p>
            </div>
            <div class="profile-row">
                <span>{move || app.text(|catalog| &catalog.profile.language)}</span>
                <LanguageSwitcher />
            </div>
            <div class="profile-row">
                <span>{move || app.text(|catalog| &catalog.profile.favorites)}</span>
                <span class="profile-count">{favorites}</span>
            </div>
            <button
                type="button"
                class="profile-row"
                on:click=move |_| app.navigate(Screen::Loyalty)
            >
                {move || app.text(|catalog| &catalog.profile.loyalty)}
            </button>
            <p class="profile-version">
                {move || app.text(|catalog| &catalog.profile.version)}
                " "
                {env!("CARGO_PKG_VERSION")}
            </p>
        </section>
    }
}

#[component]
fn LanguageSwitcher() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="language-switcher" role="group">
            {Language::ALL
                .into_iter()
                .map(|language| {
                    view! {
                        <button
                            type="button"
                            class="language-option"
                            class:language-option-active=move || app.active_language() == language
                            on:click=move |_| app.set_language(language)
                        >
                            {language.code()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(crate) fn LoyaltyScreen() -> impl IntoView {
    let app = use_app();

    let progress = move || app.loyalty.with(LoyaltyAccount::progress_percent);

    view! {
        <section class="screen loyalty-screen">
            <BackButton screen=Screen::Profile />
            <h1 class="screen-title">{move || app.text(|catalog| &catalog.loyalty.title)}</h1>
            <div class="loyalty-card">
                <p class="loyalty-tier">{move || app.loyalty.with(|account| account.tier().name())}</p>
                <p class="loyalty-points">
                    {move || app.loyalty.with(LoyaltyAccount::points)}
                    " "
                    {move || app.text(|catalog| &catalog.loyalty.points)}
                </p>
                <div class="progress">
                    <div class="progress-bar" style:width=move || format!("{}%", progress())></div>
                </div>
                {move || {
                    app.loyalty
                        .with(|account| account.tier().next().zip(account.points_to_next_tier()))
                        .map(|(next, missing)| {
                            let until = app.text(|catalog| &catalog.loyalty.until);
                            let points = app.text(|catalog| &catalog.loyalty.points);

                            view! {
                                <p class="loyalty-next">
                                    {format!("{until} {}: {missing} {points}", next.name())}
                                </p>
                            }
                        })
                }}
            </div>
            <h2>{move || app.text(|catalog| &catalog.loyalty.levels)}</h2>
            <ul class="loyalty-levels">
                {Tier::ALL
                    .into_iter()
                    .map(|tier| {
                        view! {
                            <li
                                class="loyalty-level"
                                class:loyalty-level-active=move || {
                                    app.loyalty.with(|account| account.tier() == tier)
                                }
                            >
                                <span>{tier.name()}</span>
                                <span>{tier.threshold()}</span>
                                <span>{format!("x{}", tier.multiplier().normalize())}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h2>{move || app.text(|catalog| &catalog.loyalty.rewards)}</h2>
            <ul class="loyalty-rewards">
                {Reward::ALL
                    .into_iter()
                    .map(|reward| view! { <RewardRow reward=reward /> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn RewardRow(reward: Reward) -> impl IntoView {
    let app = use_app();
    let affordable = move || app.loyalty.with(|account| account.points() >= reward.cost());

    view! {
        <li class="loyalty-reward">
            <span>{move || app.language.with(|store| reward.label(store.catalog()).to_string())}</span>
            <span>{reward.cost()}</span>
            <button
                type="button"
                class="secondary-button"
                disabled=move || !affordable()
                on:click=move |_| {
                    if let Some(Err(error)) = app.loyalty.try_update(|account| account.claim(reward)) {
                        leptos::logging::warn!("{error}");
                    }
                }
            >
                {move || app.text(|catalog| &catalog.loyalty.claim)}
            </button>
        </li>
    }
}

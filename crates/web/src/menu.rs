use std::time::Duration;

use leptos::prelude::*;
use maison::menu::{Category, CategoryFilter, Dish};

use crate::context::{AppContext, Screen, use_app};

/// Confirmation shown on the add button after a dish went into the cart.
const ADDED_FLASH: Duration = Duration::from_millis(1_500);

fn add_to_cart(app: AppContext, dish: &Dish) {
    let line = dish.to_cart_line(app.active_language());

    app.cart.update(|cart| cart.add_item(line));
}

#[component]
pub(crate) fn MenuScreen() -> impl IntoView {
    let app = use_app();
    let filter = RwSignal::new(CategoryFilter::All);
    let search = RwSignal::new(String::new());

    let dishes = move || {
        let language = app.active_language();
        let needle = search.get();
        let selected = filter.get();

        app.menu.with_value(|menu| {
            menu.filter(selected, &needle, language)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="screen menu-screen">
            <header class="screen-header">
                <h1 class="screen-title">{move || app.text(|catalog| &catalog.menu.title)}</h1>
            </header>
            <input
                type="search"
                class="menu-search"
                placeholder=move || app.text(|catalog| &catalog.menu.search)
                prop:value=move || search.get()
                on:input=move |event| search.set(event_target_value(&event))
            />
            <nav class="category-tabs">
                <CategoryTab filter=filter value=CategoryFilter::All />
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! { <CategoryTab filter=filter value=CategoryFilter::Only(category) /> }
                    })
                    .collect_view()}
            </nav>
            {move || {
                let dishes = dishes();

                if dishes.is_empty() {
                    view! {
                        <p class="menu-empty">
                            {move || app.text(|catalog| &catalog.menu.nothing_found)}
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="dish-grid">
                            {dishes
                                .into_iter()
                                .map(|dish| view! { <DishCard dish=dish /> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CategoryTab(filter: RwSignal<CategoryFilter>, value: CategoryFilter) -> impl IntoView {
    let app = use_app();

    let label = move || match value {
        CategoryFilter::All => app.text(|catalog| &catalog.menu.all),
        CategoryFilter::Only(category) => {
            app.language.with(|store| category.label(store.catalog()).to_string())
        }
    };

    view! {
        <button
            type="button"
            class="category-tab"
            class:category-tab-active=move || filter.get() == value
            on:click=move |_| filter.set(value)
        >
            {label}
        </button>
    }
}

#[component]
fn DishCard(dish: Dish) -> impl IntoView {
    let app = use_app();
    let dish = StoredValue::new(dish);
    let id = dish.with_value(|dish| dish.id.clone());
    let favorite_id = id.clone();
    let is_favorite_id = id.clone();

    let name = move || dish.with_value(|dish| dish.name(app.active_language()).to_string());
    let badge = move || {
        dish.with_value(|dish| dish.badge).map(|badge| {
            let label = app.language.with(|store| badge.label(store.catalog()).to_string());

            view! { <span class="dish-badge">{label}</span> }
        })
    };

    view! {
        <li class="dish-card" on:click=move |_| app.navigate(Screen::Dish(id.clone()))>
            <img class="dish-image" src=dish.with_value(|dish| dish.image.clone()) alt="" />
            {badge}
            <h2 class="dish-name">{name}</h2>
            <p class="dish-price">{move || app.price(dish.with_value(|dish| dish.price))}</p>
            <button
                type="button"
                class="icon-button dish-favorite"
                class:dish-favorite-active=move || {
                    app.favorites.with(|favorites| favorites.contains(&is_favorite_id))
                }
                aria-label="Favorite"
                on:click=move |event| {
                    event.stop_propagation();
                    app.favorites
                        .update(|favorites| {
                            favorites.toggle(&favorite_id);
                        });
                }
            >
                "♥"
            </button>
            <button
                type="button"
                class="icon-button dish-add"
                aria-label=move || app.text(|catalog| &catalog.dish.add_to_order)
                on:click=move |event| {
                    event.stop_propagation();
                    dish.with_value(|dish| add_to_cart(app, dish));
                }
            >
                "+"
            </button>
        </li>
    }
}

#[component]
pub(crate) fn DishScreen(id: String) -> impl IntoView {
    let app = use_app();

    let Some(dish) = app.menu.with_value(move |menu| menu.get(&id).cloned()) else {
        return view! {
            <section class="screen dish-screen">
                <BackButton screen=Screen::Menu />
                <p class="menu-empty">{move || app.text(|catalog| &catalog.menu.nothing_found)}</p>
            </section>
        }
            .into_any();
    };

    let dish = StoredValue::new(dish);
    let added = RwSignal::new(false);

    let details = move || {
        let language = app.active_language();

        app.language.with(|store| {
            let catalog = store.catalog();
            let strings = &catalog.dish;

            dish.with_value(|dish| {
                let allergens = dish.allergens.as_ref().map(|allergens| {
                    view! {
                        <h3>{strings.allergens.clone()}</h3>
                        <p>{allergens.join(", ")}</p>
                    }
                });

                view! {
                    <h1 class="dish-title">{dish.name(language).to_string()}</h1>
                    <p class="dish-meta">
                        {format!(
                            "{} {} · {} {} · {} {}",
                            dish.price,
                            catalog.common.currency,
                            dish.weight,
                            strings.grams,
                            dish.prep_time,
                            strings.minutes,
                        )}
                    </p>
                    <h3>{strings.description.clone()}</h3>
                    <p>{dish.description(language).to_string()}</p>
                    <h3>{strings.ingredients.clone()}</h3>
                    <p>{dish.ingredients(language).join(", ")}</p>
                    {allergens}
                }
            })
        })
    };

    view! {
        <section class="screen dish-screen">
            <BackButton screen=Screen::Menu />
            <img class="dish-hero" src=dish.with_value(|dish| dish.image.clone()) alt="" />
            {details}
            <button
                type="button"
                class="primary-button"
                on:click=move |_| {
                    dish.with_value(|dish| add_to_cart(app, dish));
                    added.set(true);
                    set_timeout(move || added.set(false), ADDED_FLASH);
                }
            >
                {move || {
                    if added.get() {
                        format!("✓ {}", app.text(|catalog| &catalog.dish.added))
                    } else {
                        app.text(|catalog| &catalog.dish.add_to_order)
                    }
                }}
            </button>
        </section>
    }
        .into_any()
}

#[component]
pub(crate) fn BackButton(screen: Screen) -> impl IntoView {
    let app = use_app();

    view! {
        <button
            type="button"
            class="back-button"
            on:click=move |_| app.navigate(screen.clone())
        >
            {move || format!("← {}", app.text(|catalog| &catalog.common.back))}
        </button>
    }
}

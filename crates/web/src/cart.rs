use leptos::prelude::*;
use maison::{cart::Cart, pricing::Totals};

use crate::context::{AppContext, Screen, use_app};

fn checkout(app: AppContext) {
    match app.cart.try_update(Cart::checkout) {
        Some(Ok(summary)) => {
            app.last_order.set(Some(summary));
            app.navigate(Screen::Confirmed);
        }
        Some(Err(error)) => leptos::logging::error!("checkout failed: {error}"),
        None => {}
    }
}

#[component]
pub(crate) fn CartScreen() -> impl IntoView {
    let app = use_app();
    // Only re-render the body when the cart flips between empty and filled.
    let is_empty = Memo::new(move |_| app.cart.with(Cart::is_empty));

    view! {
        <section class="screen cart-screen">
            <header class="screen-header">
                <h1 class="screen-title">{move || app.text(|catalog| &catalog.cart.title)}</h1>
            </header>
            {move || {
                if is_empty.get() {
                    view! { <EmptyCart /> }.into_any()
                } else {
                    view! { <FilledCart /> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="cart-empty">
            <p class="cart-empty-title">{move || app.text(|catalog| &catalog.cart.empty)}</p>
            <p class="cart-empty-hint">{move || app.text(|catalog| &catalog.cart.empty_hint)}</p>
            <button type="button" class="primary-button" on:click=move |_| app.navigate(Screen::Menu)>
                {move || app.text(|catalog| &catalog.cart.go_to_menu)}
            </button>
        </div>
    }
}

#[component]
fn FilledCart() -> impl IntoView {
    let app = use_app();

    view! {
        <ul class="cart-lines">
            {move || {
                app.cart
                    .with(|cart| {
                        cart.lines()
                            .iter()
                            .map(|line| {
                                view! {
                                    <CartLineRow
                                        id=line.id().to_string()
                                        name=line.name().to_string()
                                        quantity=line.quantity()
                                        line_total=line.line_total()
                                    />
                                }
                            })
                            .collect_view()
                    })
            }}
        </ul>
        <textarea
            class="cart-comment"
            placeholder=move || app.text(|catalog| &catalog.cart.comment)
            prop:value=move || app.cart.with(|cart| cart.comment().to_string())
            on:input=move |event| {
                let comment = event_target_value(&event);

                app.cart.update(|cart| cart.set_comment(comment));
            }
        ></textarea>
        {move || {
            app.cart
                .with(|cart| cart.totals().ok())
                .map(|totals| view! { <TotalsBlock totals=totals /> })
        }}
        <button type="button" class="primary-button" on:click=move |_| checkout(app)>
            {move || app.text(|catalog| &catalog.cart.checkout)}
        </button>
    }
}

#[component]
fn CartLineRow(id: String, name: String, quantity: u32, line_total: u64) -> impl IntoView {
    let app = use_app();
    let current = i64::from(quantity);
    let decrement_id = id.clone();
    let increment_id = id.clone();
    let remove_id = id;

    view! {
        <li class="cart-line">
            <span class="cart-line-name">{name}</span>
            <span class="cart-line-price">{move || app.price(line_total)}</span>
            <div class="quantity-stepper">
                <button
                    type="button"
                    class="icon-button"
                    aria-label="−"
                    on:click=move |_| {
                        app.cart.update(|cart| cart.update_quantity(&decrement_id, current - 1));
                    }
                >
                    "−"
                </button>
                <span class="quantity">{quantity}</span>
                <button
                    type="button"
                    class="icon-button"
                    aria-label="+"
                    on:click=move |_| {
                        app.cart.update(|cart| cart.update_quantity(&increment_id, current + 1));
                    }
                >
                    "+"
                </button>
            </div>
            <button
                type="button"
                class="icon-button cart-line-remove"
                aria-label="×"
                on:click=move |_| app.cart.update(|cart| cart.remove_item(&remove_id))
            >
                "×"
            </button>
        </li>
    }
}

#[component]
fn TotalsBlock(totals: Totals) -> impl IntoView {
    let app = use_app();

    view! {
        <dl class="cart-totals">
            <dt>{move || app.text(|catalog| &catalog.cart.subtotal)}</dt>
            <dd>{move || app.price(totals.subtotal())}</dd>
            <dt>{move || app.text(|catalog| &catalog.cart.service)}</dt>
            <dd>{move || app.price(totals.service_charge())}</dd>
            <dt class="cart-total">{move || app.text(|catalog| &catalog.cart.total)}</dt>
            <dd class="cart-total">{move || app.price(totals.total())}</dd>
        </dl>
    }
}

#[component]
pub(crate) fn ConfirmedScreen() -> impl IntoView {
    let app = use_app();

    let amount = move || {
        app.last_order
            .with(|order| order.as_ref().map(|order| order.totals().total()))
            .map(|total| app.price(total))
    };

    view! {
        <section class="screen confirmed-screen">
            <div class="confirmed-check">"✓"</div>
            <h1 class="screen-title">{move || app.text(|catalog| &catalog.order.confirmed)}</h1>
            <p>{move || app.text(|catalog| &catalog.order.waiter_notified)}</p>
            <p class="confirmed-amount">
                {move || app.text(|catalog| &catalog.order.amount)}
                ": "
                {amount}
            </p>
            <button type="button" class="primary-button" on:click=move |_| app.navigate(Screen::Chat)>
                {move || app.text(|catalog| &catalog.order.back_to_chat)}
            </button>
            <button type="button" class="secondary-button" on:click=move |_| app.navigate(Screen::Menu)>
                {move || app.text(|catalog| &catalog.order.view_menu)}
            </button>
        </section>
    }
}

//! Hotel result card component.

use dioxus::prelude::*;
use common::hotel::Hotel;
use dioxus_free_icons::{Icon, icons::{md_maps_icons::MdPlace, md_toggle_icons::MdStar}};

#[component]
pub fn HotelCard(hotel: ReadSignal<Hotel>) -> Element {
    let Hotel {
        name,
        description,
        location,
        rating,
        price_per_night,
        ..
    } = hotel.read().clone();
    let photo = hotel.read().first_photo().map(str::to_string);
    let price = format_price(price_per_night);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 16px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            if let Some(photo) = photo {
                img {
                    src: "{photo}",
                    alt: "{name}",
                    style: "width: 160px; height: 110px; object-fit: cover; border-radius: 6px; flex-shrink: 0;",
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 6px; flex: 1; min-width: 0;",
                // Row 1: NAME - SPACER - PRICE
                div {
                    style: "display: flex; flex-direction: row; align-items: baseline; gap: 12px;",
                    span {
                        style: "
                            font-size: 20px;
                            line-height: 28px;
                            color: rgb(0, 0, 0);
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                        ",
                        "{name}"
                    }
                    div { style: "flex: 1 1 auto;" }
                    span {
                        style: "font-size: 20px; font-weight: 500; color: #1C212D; flex-shrink: 0;",
                        "{price} / night"
                    }
                }
                // Row 2: LOCATION - RATING
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 16px; color: rgba(0, 0, 0, 0.6);",
                    if let Some(location) = location {
                        span {
                            style: "display: flex; align-items: center; gap: 4px;",
                            Icon { icon: MdPlace, style: "width: 18px; height: 18px;" }
                            "{location}"
                        }
                    }
                    if let Some(rating) = rating {
                        span {
                            style: "display: flex; align-items: center; gap: 4px;",
                            Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #E5A50A;" }
                            "{rating:.1}"
                        }
                    }
                }
                if let Some(description) = description {
                    p {
                        style: "margin: 0; color: rgba(0, 0, 0, 0.8); overflow: hidden; text-overflow: ellipsis;",
                        "{description}"
                    }
                }
            }
        }
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_maps_icons::MdHotel;
use dioxus_free_icons::Icon;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Hotels - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            div {
                style: "
                    color: #0F172A;
                    font-size: 46px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Find a place to stay"
            }
            Link {
                to: Route::hotels_page(Default::default()),
                div {
                    style: "
                        display:flex;
                        align-items: center;
                        gap: 12px;
                        width: 320px;
                        padding: 20px;
                        border-radius: 12px;
                        background: white;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        color: #1C212D;
                        font-size: 22px;
                    ",
                    Icon { icon: MdHotel, style: "width: 32px; height: 32px; color:#4F46E5;" }
                    "Browse hotels"
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:black; font-size: 26px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
            "Loading..."
        }
    }
}

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            style: "
                color: rgba(28, 33, 45, 0.7);
                font-size: 22px;
                padding: 40px;
                text-align: center;
            ",
            "No hotels match these filters."
        }
    }
}

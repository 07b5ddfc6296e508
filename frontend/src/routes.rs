use dioxus::prelude::*;

use common::query_string::QueryString;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::UrlQuery;
use crate::pages::home_page::HomePage;
use crate::pages::hotels_page::HotelsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/hotels?:..query")]
    HotelsPage { query: UrlQuery },

}

impl Route {
    pub fn hotels_page(query: QueryString) -> Self {
        Self::HotelsPage {
            query: UrlQuery::from(query),
        }
    }
}

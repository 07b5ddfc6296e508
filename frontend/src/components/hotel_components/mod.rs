pub mod hotel_card;
pub mod hotel_filter_form;
pub mod hotel_result_list;

pub mod header;
pub mod search_bar;
pub mod movie_card;
pub mod movie_modal;
pub mod pagination;

mod page_background;
mod receipt_card;

pub use page_background::PageBackground;
pub use receipt_card::ReceiptCard;

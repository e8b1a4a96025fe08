//! UI Components
//!
//! Leptos components for the board.

mod board_view;
mod card_list;
mod stage_column;
mod unplaced_panel;
mod work_item_card;
mod fetch_status;
mod toast_stack;
mod delete_confirm_button;

pub use board_view::BoardView;
pub use card_list::CardList;
pub use stage_column::StageColumn;
pub use unplaced_panel::UnplacedPanel;
pub use work_item_card::WorkItemCard;
pub use fetch_status::FetchStatus;
pub use toast_stack::ToastStack;
pub use delete_confirm_button::DeleteConfirmButton;

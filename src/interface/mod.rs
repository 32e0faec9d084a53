pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_bill_csv;
pub use prompts::{
    collect_orders, fuzzy_candidates, parse_quantity, prompt_bonus_settings, prompt_order_item,
    prompt_quantity, prompt_yes_no,
};
pub use render::{display_bill, display_items, display_summary, group_thousands};

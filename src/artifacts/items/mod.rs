//! Namespace items and their recorded actions
//!
//! - `physical_id`: identifiers of the physical records behind items
//! - `action`: item names, action kinds, and the actions themselves

use crate::artifacts::items::action::ActionType;

pub mod action;
pub mod physical_id;

pub const PHYSICAL_ID_MAX_LENGTH: usize = 8;
pub const PROJECT_SEPARATOR: &str = "/";
pub const ROOT_PROJECT_PATH: &str = "$";
pub const ROOT_PHYSICAL_ID: &str = "AAAAAAAA";

pub const ACTION_KEYWORDS: phf::Map<&'static str, ActionType> = phf::phf_map! {
    "create" => ActionType::Create,
    "add" => ActionType::Add,
    "delete" => ActionType::Delete,
    "recover" => ActionType::Recover,
    "destroy" => ActionType::Destroy,
    "rename" => ActionType::Rename,
    "label" => ActionType::Label,
    "share" => ActionType::Share,
    "branch" => ActionType::Branch,
    "edit" => ActionType::Edit,
    "pin" => ActionType::Pin,
    "unpin" => ActionType::Unpin,
    "move-from" => ActionType::MoveFrom,
    "move-to" => ActionType::MoveTo,
};

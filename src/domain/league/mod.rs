// League domain module
// Aggregate root plus its settings value objects.

#![allow(clippy::module_inception)]

pub mod league;
pub mod value_objects;

pub use league::League;
pub use value_objects::{
    DraftSettings, InviteSettings, LeagueSettings, LeagueSettingsPatch, LeagueStatus,
};

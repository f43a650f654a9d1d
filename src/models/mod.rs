mod announcement;
mod recipe;
mod text;

pub use announcement::{Announcement, AnnouncementRecord, NewAnnouncement};
pub use recipe::{NewRecipe, Recipe, RecipeRecord};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::text;

/// One object of the announcements input document. Every key is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnouncementRecord {
    #[serde(rename = "Type", deserialize_with = "text::nullable")]
    pub kind: Option<String>,
    #[serde(rename = "Title", deserialize_with = "text::nullable")]
    pub title: Option<String>,
    #[serde(rename = "Description", deserialize_with = "text::nullable")]
    pub description: Option<String>,
    #[serde(rename = "Due_Date", deserialize_with = "text::nullable")]
    pub due_date: Option<String>,
    #[serde(rename = "Due_Time", deserialize_with = "text::nullable")]
    pub due_time: Option<String>,
    #[serde(rename = "Attachments", deserialize_with = "text::nullable")]
    pub attachments: Option<String>,
    #[serde(rename = "Links", deserialize_with = "text::nullable")]
    pub links: Option<String>,
    #[serde(rename = "Assignment", deserialize_with = "text::nullable")]
    pub assignment: Option<String>,
    #[serde(rename = "Max_Points", deserialize_with = "text::nullable")]
    pub max_points: Option<String>,
    #[serde(rename = "Item_ID", deserialize_with = "text::nullable")]
    pub item_id: Option<String>,
    #[serde(rename = "Post_ID", deserialize_with = "text::nullable")]
    pub post_id: Option<String>,
    #[serde(rename = "Alternate_Link", deserialize_with = "text::nullable")]
    pub alternate_link: Option<String>,
    #[serde(rename = "Teacher", deserialize_with = "text::nullable")]
    pub teacher: Option<String>,
    #[serde(rename = "Course", deserialize_with = "text::nullable")]
    pub course: Option<String>,
    #[serde(rename = "Assignment_Link", deserialize_with = "text::nullable")]
    pub assignment_link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub uid: Uuid,
    pub record: AnnouncementRecord,
}

impl NewAnnouncement {
    pub fn new(record: AnnouncementRecord) -> Self {
        Self {
            uid: Uuid::new_v4(),
            record,
        }
    }
}

/// A stored announcement as served by `GET /announcements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub uid: Uuid,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
    pub attachments: Option<String>,
    pub links: Option<String>,
    pub assignment: Option<String>,
    pub max_points: Option<String>,
    pub item_id: Option<String>,
    pub post_id: Option<String>,
    pub alternate_link: Option<String>,
    pub teacher: Option<String>,
    pub course: Option<String>,
    pub assignment_link: Option<String>,
}

impl Announcement {
    #[cfg(test)]
    pub fn matches(&self, record: &AnnouncementRecord) -> bool {
        self.kind == record.kind
            && self.title == record.title
            && self.description == record.description
            && self.due_date == record.due_date
            && self.due_time == record.due_time
            && self.attachments == record.attachments
            && self.links == record.links
            && self.assignment == record.assignment
            && self.max_points == record.max_points
            && self.item_id == record.item_id
            && self.post_id == record.post_id
            && self.alternate_link == record.alternate_link
            && self.teacher == record.teacher
            && self.course == record.course
            && self.assignment_link == record.assignment_link
    }
}

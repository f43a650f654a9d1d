use rusqlite::types::Type;
use rusqlite::{params, Row};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Announcement, NewAnnouncement, NewRecipe, Recipe};

use super::schema::SCHEMA;

const INSERT_ANNOUNCEMENT: &str = r#"INSERT INTO announcements
    (uid, type, title, description, due_date, due_time, attachments, links, assignment,
     max_points, item_id, post_id, alternate_link, teacher, course, assignment_link)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"#;

/// A (recipe_name, recipe_url) pair held by more than one stored recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub recipe_name: Option<String>,
    pub recipe_url: Option<String>,
    pub count: i64,
}

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).await?;
        Self::init(conn).await
    }

    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await?;
        Self::init(conn).await
    }

    async fn init(conn: Connection) -> Result<Self> {
        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        Ok(Self { conn })
    }

    // Announcement operations

    /// Inserts all announcements in one transaction: either every row lands or none does.
    pub async fn insert_announcements(&self, announcements: Vec<NewAnnouncement>) -> Result<usize> {
        let inserted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                for announcement in &announcements {
                    insert_announcement_row(&tx, announcement)?;
                }
                tx.commit()?;
                Ok(announcements.len())
            })
            .await?;
        Ok(inserted)
    }

    pub async fn insert_announcement(&self, announcement: NewAnnouncement) -> Result<i64> {
        let id = self
            .conn
            .call(move |conn| Ok(insert_announcement_row(conn, &announcement)?))
            .await?;
        Ok(id)
    }

    pub async fn get_all_announcements(&self) -> Result<Vec<Announcement>> {
        let announcements = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    r#"SELECT id, uid, type, title, description, due_date, due_time, attachments,
                              links, assignment, max_points, item_id, post_id, alternate_link,
                              teacher, course, assignment_link
                       FROM announcements
                       ORDER BY id"#,
                )?;
                let announcements = stmt
                    .query_map([], announcement_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(announcements)
            })
            .await?;
        Ok(announcements)
    }

    pub async fn count_announcements(&self) -> Result<i64> {
        self.count("announcements").await
    }

    // Recipe operations

    /// Null-safe lookup: a NULL name or url matches a stored NULL.
    pub async fn recipe_exists(
        &self,
        recipe_name: Option<String>,
        recipe_url: Option<String>,
    ) -> Result<bool> {
        let exists = self
            .conn
            .call(move |conn| {
                let exists: bool = conn.query_row(
                    "SELECT EXISTS(SELECT 1 FROM recipes WHERE recipe_name IS ?1 AND recipe_url IS ?2)",
                    params![recipe_name, recipe_url],
                    |row| row.get(0),
                )?;
                Ok(exists)
            })
            .await?;
        Ok(exists)
    }

    pub async fn insert_recipe(&self, recipe: NewRecipe) -> Result<i64> {
        let ingredients_json = serde_json::to_string(&recipe.record.ingredients)?;
        let id = self
            .conn
            .call(move |conn| {
                let r = &recipe.record;
                conn.execute(
                    r#"INSERT INTO recipes
                       (uid, recipe_name, recipe_photo, recipe_url, calories, carbohydrates, net_carbs,
                        fat, protein, sodium, prep_time, difficulty_level, spice_level, ingredients)
                       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)"#,
                    params![
                        recipe.uid.to_string(),
                        r.recipe_name,
                        r.recipe_photo,
                        r.recipe_url,
                        r.calories,
                        r.carbohydrates,
                        r.net_carbs,
                        r.fat,
                        r.protein,
                        r.sodium,
                        r.prep_time,
                        r.difficulty_level,
                        r.spice_level,
                        ingredients_json,
                    ],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;
        Ok(id)
    }

    pub async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        let rows = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    r#"SELECT id, uid, recipe_name, recipe_photo, recipe_url, calories, carbohydrates,
                              net_carbs, fat, protein, sodium, prep_time, difficulty_level,
                              spice_level, ingredients
                       FROM recipes
                       ORDER BY id"#,
                )?;
                let rows = stmt
                    .query_map([], recipe_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(rows)
            })
            .await?;

        rows.into_iter()
            .map(|(mut recipe, ingredients_json)| {
                recipe.ingredients = serde_json::from_str(&ingredients_json)?;
                Ok(recipe)
            })
            .collect()
    }

    pub async fn count_recipes(&self) -> Result<i64> {
        self.count("recipes").await
    }

    pub async fn find_duplicate_recipes(&self) -> Result<Vec<DuplicateGroup>> {
        let groups = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    r#"SELECT recipe_name, recipe_url, COUNT(*) AS members
                       FROM recipes
                       GROUP BY recipe_name, recipe_url
                       HAVING COUNT(*) > 1
                       ORDER BY MIN(id)"#,
                )?;
                let groups = stmt
                    .query_map([], |row| {
                        Ok(DuplicateGroup {
                            recipe_name: row.get(0)?,
                            recipe_url: row.get(1)?,
                            count: row.get(2)?,
                        })
                    })?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(groups)
            })
            .await?;
        Ok(groups)
    }

    /// Deletes every member of each group except the one with the lowest id.
    /// All groups are handled in a single transaction.
    pub async fn remove_duplicates(&self, groups: Vec<DuplicateGroup>) -> Result<usize> {
        let removed = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let mut removed = 0;
                {
                    let mut stmt = tx.prepare(
                        r#"DELETE FROM recipes
                           WHERE recipe_name IS ?1 AND recipe_url IS ?2
                             AND id > (SELECT MIN(id) FROM recipes
                                       WHERE recipe_name IS ?1 AND recipe_url IS ?2)"#,
                    )?;
                    for group in &groups {
                        removed += stmt.execute(params![group.recipe_name, group.recipe_url])?;
                    }
                }
                tx.commit()?;
                Ok(removed)
            })
            .await?;
        Ok(removed)
    }

    async fn count(&self, table: &'static str) -> Result<i64> {
        let count = self
            .conn
            .call(move |conn| {
                let count: i64 =
                    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
                Ok(count)
            })
            .await?;
        Ok(count)
    }
}

fn insert_announcement_row(
    conn: &rusqlite::Connection,
    announcement: &NewAnnouncement,
) -> rusqlite::Result<i64> {
    let r = &announcement.record;
    conn.execute(
        INSERT_ANNOUNCEMENT,
        params![
            announcement.uid.to_string(),
            r.kind,
            r.title,
            r.description,
            r.due_date,
            r.due_time,
            r.attachments,
            r.links,
            r.assignment,
            r.max_points,
            r.item_id,
            r.post_id,
            r.alternate_link,
            r.teacher,
            r.course,
            r.assignment_link,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn parse_uid(row: &Row, idx: usize) -> rusqlite::Result<Uuid> {
    let raw: String = row.get(idx)?;
    Uuid::parse_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn announcement_from_row(row: &Row) -> rusqlite::Result<Announcement> {
    Ok(Announcement {
        id: row.get(0)?,
        uid: parse_uid(row, 1)?,
        kind: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        due_date: row.get(5)?,
        due_time: row.get(6)?,
        attachments: row.get(7)?,
        links: row.get(8)?,
        assignment: row.get(9)?,
        max_points: row.get(10)?,
        item_id: row.get(11)?,
        post_id: row.get(12)?,
        alternate_link: row.get(13)?,
        teacher: row.get(14)?,
        course: row.get(15)?,
        assignment_link: row.get(16)?,
    })
}

/// Ingredients come back as raw JSON text and are decoded by the caller.
fn recipe_from_row(row: &Row) -> rusqlite::Result<(Recipe, String)> {
    let recipe = Recipe {
        id: row.get(0)?,
        uid: parse_uid(row, 1)?,
        recipe_name: row.get(2)?,
        recipe_photo: row.get(3)?,
        recipe_url: row.get(4)?,
        calories: row.get(5)?,
        carbohydrates: row.get(6)?,
        net_carbs: row.get(7)?,
        fat: row.get(8)?,
        protein: row.get(9)?,
        sodium: row.get(10)?,
        prep_time: row.get(11)?,
        difficulty_level: row.get(12)?,
        spice_level: row.get(13)?,
        ingredients: Vec::new(),
    };
    Ok((recipe, row.get(14)?))
}

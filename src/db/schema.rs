pub const SCHEMA: &str = r#"
-- announcements table
CREATE TABLE IF NOT EXISTS announcements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uid TEXT NOT NULL UNIQUE,
    type TEXT,
    title TEXT,
    description TEXT,
    due_date TEXT,
    due_time TEXT,
    attachments TEXT,
    links TEXT,
    assignment TEXT,
    max_points TEXT,
    item_id TEXT,
    post_id TEXT,
    alternate_link TEXT,
    teacher TEXT,
    course TEXT,
    assignment_link TEXT
);

-- recipes table (ingredients holds a JSON array)
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uid TEXT NOT NULL UNIQUE,
    recipe_name TEXT,
    recipe_photo TEXT,
    recipe_url TEXT,
    calories TEXT,
    carbohydrates TEXT,
    net_carbs TEXT,
    fat TEXT,
    protein TEXT,
    sodium TEXT,
    prep_time TEXT,
    difficulty_level TEXT,
    spice_level TEXT,
    ingredients TEXT NOT NULL DEFAULT '[]'
);

-- not UNIQUE: duplicates are removed by the cleanup pass
CREATE INDEX IF NOT EXISTS idx_recipes_name_url ON recipes(recipe_name, recipe_url);
"#;

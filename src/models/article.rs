use uuid::Uuid;

/// One article record as it is inserted into the `articles` table.
/// The id is generated at construction time and never read from input.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: String,
    pub hacker_news_url: String,
}

/// Number of fields expected from each CSV data row (the id is not one of them).
pub const CSV_FIELDS: usize = 6;

impl Article {
    /// Build an article from the 6 positional CSV fields, generating a fresh
    /// random id in canonical hyphenated form.
    pub fn from_fields(fields: [&str; CSV_FIELDS]) -> Self {
        let [url, title, description, image_url, date, hacker_news_url] = fields;
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            date: date.to_string(),
            hacker_news_url: hacker_news_url.to_string(),
        }
    }
}

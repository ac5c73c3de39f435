pub struct ProductCreateRequest {
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
    pub category: String,
    pub image_url: String,
}

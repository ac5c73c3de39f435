use common::error::Res;
use db::models::product::Product;
use sqlx::SqlitePool;

use crate::dtos::catalog::ALL_CATEGORIES;

/// Products in id order. `None` or `All` returns the whole catalog, any other
/// value matches the category exactly.
pub async fn list_products(pool: &SqlitePool, category: Option<&str>) -> Res<Vec<Product>> {
    match category {
        None | Some(ALL_CATEGORIES) => db::product::get_all_products(pool).await,
        Some(category) => {
            let products = db::product::get_products_by_category(pool, category).await?;
            log::debug!("{} products in category '{}'", products.len(), category);
            Ok(products)
        }
    }
}

pub async fn distinct_categories(pool: &SqlitePool) -> Res<Vec<String>> {
    db::product::get_distinct_categories(pool).await
}

/// Filter choices: `All` followed by every category in the catalog.
pub async fn category_choices(pool: &SqlitePool) -> Res<Vec<String>> {
    let mut choices = vec![ALL_CATEGORIES.to_string()];
    choices.extend(distinct_categories(pool).await?);
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_pool() -> SqlitePool {
        let pool = db::setup_in_memory().await.unwrap();
        db::seed::seed_products(&pool).await.unwrap();
        pool
    }

    #[actix_web::test]
    async fn filter_returns_only_that_category() {
        let pool = seeded_pool().await;
        let products = list_products(&pool, Some("Clothing")).await.unwrap();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.category == "Clothing"));
        assert!(products.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[actix_web::test]
    async fn all_returns_whole_catalog() {
        let pool = seeded_pool().await;
        let all = list_products(&pool, Some("All")).await.unwrap();
        let unfiltered = list_products(&pool, None).await.unwrap();
        assert_eq!(all.len(), 133);
        assert_eq!(all.len(), unfiltered.len());
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let categories = distinct_categories(&pool).await.unwrap();
        assert_eq!(categories.len(), 6);
        assert!(all.iter().all(|p| categories.contains(&p.category)));
    }

    #[actix_web::test]
    async fn unknown_category_is_empty() {
        let pool = seeded_pool().await;
        assert!(list_products(&pool, Some("Groceries")).await.unwrap().is_empty());
        // matching is case-sensitive
        assert!(list_products(&pool, Some("clothing")).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn choices_start_with_all() {
        let pool = seeded_pool().await;
        let choices = category_choices(&pool).await.unwrap();
        assert_eq!(choices[0], "All");
        assert_eq!(choices[1], "Electronics");
        assert_eq!(choices.len(), 7);
    }
}

use crate::entities::product_entity as products;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

const MIN_QUERY_LEN: usize = 3;

/// 查询词校验：去除首尾空白后按字符数 (而非字节数) 检查下限
fn validate_search_query(query: &str) -> AppResult<&str> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::ValidationError(format!(
            "Search query must be at least {MIN_QUERY_LEN} characters"
        )));
    }
    Ok(query)
}

#[derive(Clone)]
pub struct ProductService {
    pool: DatabaseConnection,
}

impl ProductService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 按名称或品牌做大小写不敏感的子串搜索。
    /// 查询不足 3 字符是 400；无命中是 404 而不是空 200
    pub async fn search(&self, query: &str) -> AppResult<Vec<ProductResponse>> {
        let query = validate_search_query(query)?;

        let rows = products::Entity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(products::Column::ProductName).ilike(format!("%{query}%")))
                    .add(Expr::col(products::Column::ProductBrand).ilike(format!("%{query}%"))),
            )
            .order_by_desc(products::Column::Id)
            .all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Err(AppError::NotFound("No matching products".to_string()));
        }

        Ok(rows.into_iter().map(ProductResponse::from).collect())
    }

    /// 业务主键查询
    pub async fn by_product_id(&self, product_id: &str) -> AppResult<ProductResponse> {
        let row = products::Entity::find()
            .filter(products::Column::ProductId.eq(product_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
        Ok(ProductResponse::from(row))
    }

    pub async fn create(&self, request: CreateProductRequest) -> AppResult<ProductResponse> {
        let mut missing: Vec<&str> = Vec::new();
        if request.product_id.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("productId");
        }
        if request.product_name.as_deref().unwrap_or("").trim().is_empty() {
            missing.push("productName");
        }
        if request
            .product_number
            .as_deref()
            .unwrap_or("")
            .trim()
            .is_empty()
        {
            missing.push("productNumber");
        }
        if request
            .product_description
            .as_deref()
            .unwrap_or("")
            .trim()
            .is_empty()
        {
            missing.push("productDescription");
        }
        if request.quantity.is_none() {
            missing.push("quantity");
        }
        if request
            .product_brand
            .as_deref()
            .unwrap_or("")
            .trim()
            .is_empty()
        {
            missing.push("productBrand");
        }
        if request.price.is_none() {
            missing.push("price");
        }
        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        let quantity = request.quantity.unwrap_or_default();
        let price = request.price.unwrap_or_default();
        if quantity < 0 {
            return Err(AppError::ValidationError(
                "Quantity cannot be negative".to_string(),
            ));
        }
        if price < 0 {
            return Err(AppError::ValidationError(
                "Price cannot be negative".to_string(),
            ));
        }

        // 业务主键唯一性在应用层保证 (schema 层面没有约束)
        let product_id = request.product_id.unwrap_or_default().trim().to_string();
        let existing = products::Entity::find()
            .filter(products::Column::ProductId.eq(product_id.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(format!(
                "Product id already in use: {product_id}"
            )));
        }

        let row = products::ActiveModel {
            product_id: Set(product_id),
            product_name: Set(request.product_name.unwrap_or_default().trim().to_string()),
            product_number: Set(request.product_number.unwrap_or_default()),
            product_description: Set(request.product_description.unwrap_or_default()),
            quantity: Set(quantity),
            image_url: Set(request.image_url),
            product_brand: Set(request.product_brand.unwrap_or_default().trim().to_string()),
            price: Set(price),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(ProductResponse::from(row))
    }

    pub async fn update(
        &self,
        product_id: &str,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        let row = products::Entity::find()
            .filter(products::Column::ProductId.eq(product_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        if let Some(quantity) = request.quantity
            && quantity < 0
        {
            return Err(AppError::ValidationError(
                "Quantity cannot be negative".to_string(),
            ));
        }
        if let Some(price) = request.price
            && price < 0
        {
            return Err(AppError::ValidationError(
                "Price cannot be negative".to_string(),
            ));
        }

        let mut am = row.into_active_model();
        if let Some(name) = request.product_name {
            am.product_name = Set(name);
        }
        if let Some(number) = request.product_number {
            am.product_number = Set(number);
        }
        if let Some(description) = request.product_description {
            am.product_description = Set(description);
        }
        if let Some(quantity) = request.quantity {
            am.quantity = Set(quantity);
        }
        if let Some(image_url) = request.image_url {
            am.image_url = Set(Some(image_url));
        }
        if let Some(brand) = request.product_brand {
            am.product_brand = Set(brand);
        }
        if let Some(price) = request.price {
            am.price = Set(price);
        }
        let updated = am.update(&self.pool).await?;

        Ok(ProductResponse::from(updated))
    }

    pub async fn delete(&self, product_id: &str) -> AppResult<()> {
        let result = products::Entity::delete_many()
            .filter(products::Column::ProductId.eq(product_id))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_query_length_boundary() {
        assert!(validate_search_query("ab").is_err());
        // 空白不计入长度
        assert!(validate_search_query("  ab  ").is_err());
        assert!(validate_search_query("abc").is_ok());
        assert_eq!(validate_search_query(" brake ").unwrap(), "brake");
    }

    #[test]
    fn test_validate_search_query_counts_chars_not_bytes() {
        // 单个多字节字符不满足 3 字符下限，即便字节数已达标
        assert!(validate_search_query("刹").is_err());
        assert!(validate_search_query("刹车").is_err());
        assert!(validate_search_query("刹车片").is_ok());
    }
}

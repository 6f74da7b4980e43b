use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 购物车条目。服务端不做按商品合并，客户端在内存中完成
/// 增减/删除后通过一次保存整体替换
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 单价(美分)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remarks: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveCartRequest {
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_round_trip() {
        // 最小负载：缺省字段在序列化时不应出现
        let json = r#"{"productId":1,"quantity":3}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.product_id, 1);
        assert_eq!(item.quantity, 3);
        assert_eq!(serde_json::to_string(&item).unwrap(), json);
    }

    #[test]
    fn test_cart_item_full_round_trip() {
        let item = CartItem {
            product_id: 7,
            name: Some("Oil Filter".to_string()),
            price: Some(1299),
            quantity: 2,
            remarks: "OEM only".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}

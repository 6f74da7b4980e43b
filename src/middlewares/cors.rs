use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| {
            // 生产环境应收紧为店面/后台域名白名单
            true
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 放开任意 Header：登录请求会携带自定义的 X-Client-Location
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

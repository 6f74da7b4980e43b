use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    PasswordHash,
    LoginCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Staff {
    Table,
    Id,
    StaffCode,
    Name,
    Email,
    Phone,
    PasswordHash,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    ProductId,
    ProductName,
    ProductNumber,
    ProductDescription,
    Quantity,
    ImageUrl,
    ProductBrand,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Carts {
    Table,
    Id,
    CustomerId,
    Items,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rfqs {
    Table,
    Id,
    RfqNumber,
    Status,
    QrCode,
    Remarks,
    CustomerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RfqItems {
    Table,
    Id,
    RfqId,
    ProductName,
    Quantity,
    Remarks,
}

#[derive(DeriveIden)]
enum Deliveries {
    Table,
    Id,
    RfqId,
    PoNumber,
    AssignedTo,
    DeliveryDate,
    Timing,
    Location,
    Description,
    Phone,
    DeliveryProvider,
    Status,
    CustomerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DeliveryProducts {
    Table,
    Id,
    DeliveryId,
    Item,
    Quantity,
    Remarks,
}

#[derive(DeriveIden)]
enum LoginAttempts {
    Table,
    Id,
    Email,
    Ip,
    Location,
    Device,
    AnomalyScore,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PasswordResetOtps {
    Table,
    Id,
    Email,
    OtpHash,
    ExpiresAt,
    Attempts,
    Used,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    CustomerId,
    Name,
    Email,
    Text,
    Rating,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::Phone).string_len(50).null())
                    .col(ColumnDef::new(Customers::Address).text().null())
                    .col(ColumnDef::new(Customers::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Customers::LoginCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Customers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staff::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 入库后回填，派生自 id 与创建年份
                    .col(ColumnDef::new(Staff::StaffCode).string_len(50).null().unique_key())
                    .col(ColumnDef::new(Staff::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Staff::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Staff::Phone)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Staff::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Staff::Role)
                            .string_len(20)
                            .not_null()
                            .default("viewer"),
                    )
                    .col(
                        ColumnDef::new(Staff::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 业务主键；唯一性由应用层校验
                    .col(ColumnDef::new(Products::ProductId).string_len(100).not_null())
                    .col(ColumnDef::new(Products::ProductName).string_len(255).not_null())
                    .col(ColumnDef::new(Products::ProductNumber).string_len(100).not_null())
                    .col(ColumnDef::new(Products::ProductDescription).text().not_null())
                    .col(ColumnDef::new(Products::Quantity).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Products::ImageUrl).text().null())
                    .col(ColumnDef::new(Products::ProductBrand).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Price).big_integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Products::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Carts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Carts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Carts::CustomerId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Carts::Items).json_binary().not_null())
                    .col(
                        ColumnDef::new(Carts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rfqs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rfqs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 插入时为占位串，拿到 id 后在同一事务里回填 RFQ{id:05}
                    .col(ColumnDef::new(Rfqs::RfqNumber).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Rfqs::Status)
                            .string_len(50)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Rfqs::QrCode).text().null())
                    .col(ColumnDef::new(Rfqs::Remarks).text().null())
                    .col(ColumnDef::new(Rfqs::CustomerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rfqs::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Rfqs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RfqItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RfqItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RfqItems::RfqId).big_integer().not_null())
                    // 自由文本，有意不引用 products
                    .col(ColumnDef::new(RfqItems::ProductName).string_len(255).not_null())
                    .col(ColumnDef::new(RfqItems::Quantity).big_integer().not_null())
                    .col(
                        ColumnDef::new(RfqItems::Remarks)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Deliveries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deliveries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 松散引用 rfqs.id，不建外键，快照不受 RFQ 后续变更影响
                    .col(ColumnDef::new(Deliveries::RfqId).big_integer().not_null())
                    .col(ColumnDef::new(Deliveries::PoNumber).string_len(100).not_null())
                    .col(ColumnDef::new(Deliveries::AssignedTo).string_len(255).null())
                    .col(ColumnDef::new(Deliveries::DeliveryDate).string_len(50).not_null())
                    .col(ColumnDef::new(Deliveries::Timing).string_len(100).not_null())
                    .col(ColumnDef::new(Deliveries::Location).text().not_null())
                    .col(ColumnDef::new(Deliveries::Description).text().null())
                    .col(ColumnDef::new(Deliveries::Phone).string_len(50).null())
                    .col(ColumnDef::new(Deliveries::DeliveryProvider).string_len(255).null())
                    .col(
                        ColumnDef::new(Deliveries::Status)
                            .string_len(50)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Deliveries::CustomerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Deliveries::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Deliveries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DeliveryProducts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeliveryProducts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeliveryProducts::DeliveryId).big_integer().not_null())
                    .col(ColumnDef::new(DeliveryProducts::Item).string_len(255).not_null())
                    .col(ColumnDef::new(DeliveryProducts::Quantity).big_integer().not_null())
                    .col(
                        ColumnDef::new(DeliveryProducts::Remarks)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LoginAttempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoginAttempts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LoginAttempts::Email).string_len(255).not_null())
                    .col(ColumnDef::new(LoginAttempts::Ip).string_len(64).null())
                    .col(ColumnDef::new(LoginAttempts::Location).text().null())
                    .col(ColumnDef::new(LoginAttempts::Device).text().null())
                    .col(
                        ColumnDef::new(LoginAttempts::AnomalyScore)
                            .string_len(50)
                            .not_null()
                            .default("Unknown"),
                    )
                    .col(
                        ColumnDef::new(LoginAttempts::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PasswordResetOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PasswordResetOtps::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PasswordResetOtps::Email).string_len(255).not_null())
                    .col(ColumnDef::new(PasswordResetOtps::OtpHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(PasswordResetOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PasswordResetOtps::Attempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PasswordResetOtps::Used)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PasswordResetOtps::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::CustomerId).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Reviews::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Reviews::Text).text().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // rfq_number 回填后必须唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rfqs_rfq_number")
                    .table(Rfqs::Table)
                    .col(Rfqs::RfqNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}

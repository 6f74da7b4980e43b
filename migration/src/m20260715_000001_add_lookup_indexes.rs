use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Rfqs {
    Table,
    CustomerId,
}

#[derive(DeriveIden)]
enum RfqItems {
    Table,
    RfqId,
}

#[derive(DeriveIden)]
enum Deliveries {
    Table,
    CustomerId,
}

#[derive(DeriveIden)]
enum DeliveryProducts {
    Table,
    DeliveryId,
}

#[derive(DeriveIden)]
enum LoginAttempts {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum PasswordResetOtps {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rfqs_customer_id")
                    .table(Rfqs::Table)
                    .col(Rfqs::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rfq_items_rfq_id")
                    .table(RfqItems::Table)
                    .col(RfqItems::RfqId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deliveries_customer_id")
                    .table(Deliveries::Table)
                    .col(Deliveries::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_delivery_products_delivery_id")
                    .table(DeliveryProducts::Table)
                    .col(DeliveryProducts::DeliveryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_login_attempts_email")
                    .table(LoginAttempts::Table)
                    .col(LoginAttempts::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_password_reset_otps_email")
                    .table(PasswordResetOtps::Table)
                    .col(PasswordResetOtps::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_product_id")
                    .table(Products::Table)
                    .col(Products::ProductId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}

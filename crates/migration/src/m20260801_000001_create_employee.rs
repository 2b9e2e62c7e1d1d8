use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    FatherName,
    MotherName,
    Dob,
    Doj,
    Gender,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::Name).string_len(35).not_null())
                    .col(
                        ColumnDef::new(Employee::FatherName)
                            .string_len(35)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employee::MotherName)
                            .string_len(35)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employee::Dob).date())
                    .col(ColumnDef::new(Employee::Doj).date())
                    .col(ColumnDef::new(Employee::Gender).string_len(6).not_null())
                    .col(
                        ColumnDef::new(Employee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .col(
                        ColumnDef::new(Employee::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;
        Ok(())
    }
}

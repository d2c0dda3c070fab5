use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建管理员表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Name).string().not_null())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Admins::SchoolId).big_integer().null())
                    .col(ColumnDef::new(Admins::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Admins::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学校表
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(ColumnDef::new(Schools::Address).text().null())
                    .col(ColumnDef::new(Schools::LogoUrl).string().null())
                    .col(ColumnDef::new(Schools::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Schools::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Schools::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schools::Table, Schools::CreatedBy)
                            .to(Admins::Table, Admins::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Teachers::Subject).string().null())
                    .col(
                        ColumnDef::new(Teachers::ReceiveMails)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Teachers::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::ParentEmail).string().null())
                    .col(ColumnDef::new(Students::Standard).string().null())
                    .col(
                        ColumnDef::new(Students::Points)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Students::SendNotifications)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Students::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建表单表
        manager
            .create_table(
                Table::create()
                    .table(Forms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Forms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Forms::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Forms::FormName).string().not_null())
                    .col(ColumnDef::new(Forms::FormType).string().not_null())
                    .col(ColumnDef::new(Forms::Questions).text().not_null())
                    .col(
                        ColumnDef::new(Forms::StudentEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Forms::TeacherEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Forms::SchoolAdminEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Forms::ParentEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Forms::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Forms::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Forms::Table, Forms::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建表单提交表
        manager
            .create_table(
                Table::create()
                    .table(FormSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FormSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FormSubmissions::FormId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormSubmissions::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FormSubmissions::Answers).text().not_null())
                    .col(
                        ColumnDef::new(FormSubmissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FormSubmissions::Table, FormSubmissions::FormId)
                            .to(Forms::Table, Forms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FormSubmissions::Table, FormSubmissions::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建积分流水表（只增不改）
        manager
            .create_table(
                Table::create()
                    .table(PointsHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PointsHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PointsHistory::FormId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PointsHistory::FormType).string().not_null())
                    .col(ColumnDef::new(PointsHistory::FormName).string().not_null())
                    .col(
                        ColumnDef::new(PointsHistory::FormSubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PointsHistory::SubmittedById)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PointsHistory::SubmittedByName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PointsHistory::SubmittedForId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PointsHistory::SubmittedForName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PointsHistory::Points).big_integer().not_null())
                    .col(
                        ColumnDef::new(PointsHistory::SchoolId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PointsHistory::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PointsHistory::Table, PointsHistory::FormSubmissionId)
                            .to(FormSubmissions::Table, FormSubmissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 教师、学生按学校查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_school_id")
                    .table(Teachers::Table)
                    .col(Teachers::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_school_id")
                    .table(Students::Table)
                    .col(Students::SchoolId)
                    .to_owned(),
            )
            .await?;

        // 表单按学校查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_forms_school_id")
                    .table(Forms::Table)
                    .col(Forms::SchoolId)
                    .to_owned(),
            )
            .await?;

        // 学校按管理员查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schools_created_by")
                    .table(Schools::Table)
                    .col(Schools::CreatedBy)
                    .to_owned(),
            )
            .await?;

        // 积分流水按学校查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_points_history_school_id")
                    .table(PointsHistory::Table)
                    .col(PointsHistory::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_points_history_submitted_for_id")
                    .table(PointsHistory::Table)
                    .col(PointsHistory::SubmittedForId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(PointsHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FormSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Forms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    SchoolId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Schools {
    #[sea_orm(iden = "schools")]
    Table,
    Id,
    Name,
    Address,
    LogoUrl,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Subject,
    ReceiveMails,
    SchoolId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    ParentEmail,
    Standard,
    Points,
    SendNotifications,
    SchoolId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Forms {
    #[sea_orm(iden = "forms")]
    Table,
    Id,
    SchoolId,
    FormName,
    FormType,
    Questions,
    StudentEmail,
    TeacherEmail,
    SchoolAdminEmail,
    ParentEmail,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FormSubmissions {
    #[sea_orm(iden = "form_submissions")]
    Table,
    Id,
    FormId,
    TeacherId,
    Answers,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PointsHistory {
    #[sea_orm(iden = "points_history")]
    Table,
    Id,
    FormId,
    FormType,
    FormName,
    FormSubmissionId,
    SubmittedById,
    SubmittedByName,
    SubmittedForId,
    SubmittedForName,
    Points,
    SchoolId,
    CreatedAt,
}

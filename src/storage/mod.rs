use std::sync::Arc;

use crate::models::{
    accounts::Account,
    forms::Form,
    forms::requests::FormPayload,
    points::PointsHistory,
    schools::{
        School,
        requests::{CreateSchoolRequest, UpdateSchoolRequest},
    },
    students::{
        Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    submissions::{FormSubmission, requests::PointAwardRecord},
    teachers::{
        Teacher,
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 管理员管理方法
    // 创建管理员（password_hash 已由业务层哈希）
    async fn create_admin(&self, name: &str, email: &str, password_hash: &str) -> Result<Account>;
    // 通过ID获取管理员
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Account>>;
    // 通过邮箱获取管理员
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Account>>;
    // 统计管理员数量
    async fn count_admins(&self) -> Result<u64>;
    // 管理员创建学校后回填 school_id
    async fn set_admin_school(&self, admin_id: i64, school_id: i64) -> Result<bool>;

    /// 学校管理方法
    // 创建学校
    async fn create_school(&self, admin_id: i64, school: CreateSchoolRequest) -> Result<School>;
    // 通过ID获取学校
    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>>;
    // 获取管理员名下的学校
    async fn get_school_by_admin(&self, admin_id: i64) -> Result<Option<School>>;
    // 更新学校信息
    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>>;

    /// 教师管理方法
    // 创建教师
    async fn create_teacher(
        &self,
        school_id: i64,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher>;
    // 通过ID获取教师
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 按学校分页列出教师
    async fn list_teachers_with_pagination(
        &self,
        school_id: i64,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse>;
    // 更新教师信息
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生（积分恒从 0 开始）
    async fn create_student(
        &self,
        school_id: i64,
        student: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 按学校分页列出学生
    async fn list_students_with_pagination(
        &self,
        school_id: i64,
        query: StudentListParams,
    ) -> Result<StudentListResponse>;
    // 更新学生信息（points 不可经此修改）
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 表单管理方法
    // 创建表单
    async fn create_form(&self, school_id: i64, form: FormPayload) -> Result<Form>;
    // 通过ID获取表单
    async fn get_form_by_id(&self, id: i64) -> Result<Option<Form>>;
    // 编辑表单（全字段替换）
    async fn update_form(&self, id: i64, form: FormPayload) -> Result<Option<Form>>;
    // 删除表单，返回被删除的表单
    async fn delete_form(&self, id: i64) -> Result<Option<Form>>;
    // 列出学校的所有表单
    async fn list_forms_by_school(&self, school_id: i64) -> Result<Vec<Form>>;

    /// 积分入账方法
    // 单事务写入：提交记录 + 学生余额原子自增 + 流水条目
    async fn record_point_award(
        &self,
        record: PointAwardRecord,
    ) -> Result<(FormSubmission, PointsHistory)>;
    // 列出学校的全部积分流水
    async fn list_points_history_by_school(&self, school_id: i64) -> Result<Vec<PointsHistory>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

use crate::entities::{
    customer_entity as customers, login_attempt_entity as login_attempts,
    password_reset_otp_entity as otps, staff_entity as staff,
};
use crate::error::{AppError, AppResult};
use crate::external::{AnomalyService, MailerService};
use crate::models::*;
use crate::utils::*;
use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::str::FromStr;

const OTP_TTL_MINUTES: i64 = 10;
const OTP_MAX_ATTEMPTS: i32 = 5;

/// 登录请求携带的客户端上下文，写入登录审计日志
#[derive(Debug, Clone, Default)]
pub struct LoginContext {
    pub ip: Option<String>,
    pub device: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
    mailer_service: MailerService,
    anomaly_service: AnomalyService,
}

impl AuthService {
    pub fn new(
        pool: DatabaseConnection,
        jwt_service: JwtService,
        mailer_service: MailerService,
        anomaly_service: AnomalyService,
    ) -> Self {
        Self {
            pool,
            jwt_service,
            mailer_service,
            anomaly_service,
        }
    }

    pub async fn register_customer(&self, request: RegisterCustomerRequest) -> AppResult<AuthResponse> {
        validate_email(&request.email)?;
        validate_password(&request.password)?;
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError("Name is required".to_string()));
        }

        // 检查邮箱是否已注册
        let existing = customers::Entity::find()
            .filter(customers::Column::Email.eq(request.email.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError("Email already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;

        let customer = customers::ActiveModel {
            name: Set(request.name.trim().to_string()),
            email: Set(request.email.clone()),
            phone: Set(request.phone),
            address: Set(request.address),
            password_hash: Set(password_hash),
            login_count: Set(0),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        let access_token = self.jwt_service.generate_access_token(customer.id, "customer")?;
        let refresh_token = self.jwt_service.generate_refresh_token(customer.id, "customer")?;

        Ok(AuthResponse {
            customer: CustomerResponse::from(customer),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn login_customer(
        &self,
        request: LoginRequest,
        ctx: LoginContext,
    ) -> AppResult<AuthResponse> {
        let customer = customers::Entity::find()
            .filter(customers::Column::Email.eq(request.email.clone()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &customer.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        // 登录成功：记录审计日志并累加登录次数
        self.record_login_attempt(&customer.email, &ctx).await;

        let login_count = customer.login_count;
        let customer_id = customer.id;
        let mut am = customer.clone().into_active_model();
        am.login_count = Set(login_count + 1);
        let customer = am.update(&self.pool).await?;

        let access_token = self.jwt_service.generate_access_token(customer_id, "customer")?;
        let refresh_token = self.jwt_service.generate_refresh_token(customer_id, "customer")?;

        Ok(AuthResponse {
            customer: CustomerResponse::from(customer),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn current_customer(&self, customer_id: i64) -> AppResult<CustomerResponse> {
        let customer = customers::Entity::find_by_id(customer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;
        Ok(CustomerResponse::from(customer))
    }

    pub async fn update_customer(
        &self,
        customer_id: i64,
        request: UpdateCustomerRequest,
    ) -> AppResult<CustomerResponse> {
        if request.name.is_none() && request.phone.is_none() && request.address.is_none() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        let mut model = customers::Entity::find_by_id(customer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?
            .into_active_model();
        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError("Name cannot be empty".to_string()));
            }
            model.name = Set(name.trim().to_string());
        }
        if let Some(phone) = request.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(address) = request.address {
            model.address = Set(Some(address));
        }
        let updated = model.update(&self.pool).await?;

        Ok(CustomerResponse::from(updated))
    }

    pub async fn register_staff(&self, request: RegisterStaffRequest) -> AppResult<StaffAuthResponse> {
        validate_email(&request.email)?;
        validate_password(&request.password)?;
        if request.phone.trim().is_empty() {
            return Err(AppError::ValidationError("Phone is required".to_string()));
        }

        let role = match &request.role {
            Some(r) => StaffRole::from_str(r)
                .map_err(|_| AppError::ValidationError(format!("Unknown staff role: {r}")))?,
            None => StaffRole::Viewer,
        };

        let existing = staff::Entity::find()
            .filter(
                sea_orm::Condition::any()
                    .add(staff::Column::Email.eq(request.email.clone()))
                    .add(staff::Column::Phone.eq(request.phone.clone())),
            )
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(
                "Email or phone already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;

        // 先插入拿到自增 id，再回填派生的员工编号
        let inserted = staff::ActiveModel {
            staff_code: Set(None),
            name: Set(request.name.trim().to_string()),
            email: Set(request.email),
            phone: Set(request.phone),
            password_hash: Set(password_hash),
            role: Set(role),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        let staff_code = format_staff_code(inserted.id, current_year());
        let staff_id = inserted.id;
        let role_str = inserted.role.to_string();
        let mut am = inserted.into_active_model();
        am.staff_code = Set(Some(staff_code));
        let member = am.update(&self.pool).await?;

        let access_token = self.jwt_service.generate_access_token(staff_id, &role_str)?;
        let refresh_token = self.jwt_service.generate_refresh_token(staff_id, &role_str)?;

        Ok(StaffAuthResponse {
            staff: StaffResponse::from(member),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn login_staff(
        &self,
        request: StaffLoginRequest,
        ctx: LoginContext,
    ) -> AppResult<StaffAuthResponse> {
        let member = staff::Entity::find()
            .filter(staff::Column::Email.eq(request.email.clone()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &member.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        self.record_login_attempt(&member.email, &ctx).await;

        let role = member.role.to_string();
        let access_token = self.jwt_service.generate_access_token(member.id, &role)?;
        let refresh_token = self.jwt_service.generate_refresh_token(member.id, &role)?;

        Ok(StaffAuthResponse {
            staff: StaffResponse::from(member),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn refresh(&self, request: RefreshRequest) -> AppResult<RefreshResponse> {
        let claims = self.jwt_service.verify_refresh_token(&request.refresh_token)?;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;

        let access_token = self.jwt_service.generate_access_token(user_id, &claims.role)?;

        Ok(RefreshResponse {
            access_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }

    pub async fn forgot_password(&self, request: ForgotPasswordRequest) -> AppResult<()> {
        validate_email(&request.email)?;

        // 只对已注册邮箱发起流程，但响应不泄露账户是否存在
        let customer = customers::Entity::find()
            .filter(customers::Column::Email.eq(request.email.clone()))
            .one(&self.pool)
            .await?;
        let Some(customer) = customer else {
            log::info!("Password reset requested for unknown email");
            return Ok(());
        };

        let otp = generate_otp();
        let otp_hash = hash_password(&otp)?;

        otps::ActiveModel {
            email: Set(customer.email.clone()),
            otp_hash: Set(otp_hash),
            expires_at: Set(Utc::now() + Duration::minutes(OTP_TTL_MINUTES)),
            attempts: Set(0),
            used: Set(false),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        // 尽力而为：邮件服务故障不让请求失败
        if let Err(e) = self
            .mailer_service
            .send_password_reset_otp(&customer.email, &otp)
            .await
        {
            log::error!("Failed to send OTP email: {e:?}");
        }

        Ok(())
    }

    pub async fn verify_otp(&self, request: VerifyOtpRequest) -> AppResult<()> {
        self.check_otp(&request.email, &request.otp).await?;
        Ok(())
    }

    pub async fn reset_password(&self, request: ResetPasswordRequest) -> AppResult<()> {
        validate_password(&request.new_password)?;

        let otp_row = self.check_otp(&request.email, &request.otp).await?;

        // OTP 消费与密码改写在同一事务里，不会出现 OTP 已用掉但密码未改的中间态
        let txn = self.pool.begin().await?;

        let mut am = otp_row.into_active_model();
        am.used = Set(true);
        am.update(&txn).await?;

        let customer = customers::Entity::find()
            .filter(customers::Column::Email.eq(request.email.clone()))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let password_hash = hash_password(&request.new_password)?;
        let mut am = customer.into_active_model();
        am.password_hash = Set(password_hash);
        am.update(&txn).await?;

        txn.commit().await?;

        Ok(())
    }

    /// 活动流程 = 该邮箱最新一条未使用记录；校验过期与尝试次数上限
    async fn check_otp(&self, email: &str, otp: &str) -> AppResult<otps::Model> {
        let row = otps::Entity::find()
            .filter(otps::Column::Email.eq(email.to_string()))
            .filter(otps::Column::Used.eq(false))
            .order_by_desc(otps::Column::Id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::ValidationError("No active password reset request".to_string())
            })?;

        if row.expires_at < Utc::now() {
            return Err(AppError::ValidationError("OTP has expired".to_string()));
        }
        if row.attempts >= OTP_MAX_ATTEMPTS {
            return Err(AppError::ValidationError(
                "Too many attempts, request a new OTP".to_string(),
            ));
        }

        if !verify_password(otp, &row.otp_hash)? {
            let attempts = row.attempts;
            let mut am = row.into_active_model();
            am.attempts = Set(attempts + 1);
            am.update(&self.pool).await?;
            return Err(AppError::ValidationError("Invalid OTP".to_string()));
        }

        Ok(row)
    }

    /// 追加登录审计行。评分服务不可用时使用启发式标签，
    /// 审计写入失败只记日志，不影响登录
    async fn record_login_attempt(&self, email: &str, ctx: &LoginContext) {
        let anomaly_score = self
            .anomaly_service
            .score_login(email, ctx.ip.as_deref(), ctx.device.as_deref())
            .await;

        let attempt = login_attempts::ActiveModel {
            id: NotSet,
            email: Set(email.to_string()),
            ip: Set(ctx.ip.clone()),
            location: Set(ctx.location.clone()),
            device: Set(ctx.device.clone()),
            anomaly_score: Set(anomaly_score),
            created_at: NotSet,
        };

        if let Err(e) = attempt.insert(&self.pool).await {
            log::error!("Failed to record login attempt: {e:?}");
        }
    }
}

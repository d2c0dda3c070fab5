use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::config::{AppConfig, SmtpConfig};
use crate::errors::{PointSystemError, Result};

/// 邮件附件
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// SMTP 邮件发送器
///
/// 配置中 smtp.host 为空时不构造实例，调用方据此跳过发送。
pub struct Mailer {
    config: SmtpConfig,
}

impl Mailer {
    /// 从全局配置构造；未配置 SMTP 时返回 None
    pub fn from_config() -> Option<Self> {
        let config = AppConfig::get();
        if !config.smtp.is_enabled() {
            warn!("SMTP host not configured, email notifications are disabled");
            return None;
        }
        Some(Self {
            config: config.smtp.clone(),
        })
    }

    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// 发送一封通知邮件（html + 纯文本双版本，可选附件）
    pub async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
        attachment: Option<&EmailAttachment>,
    ) -> Result<()> {
        let alternative = MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_PLAIN)
                    .body(text_body.to_string()),
            )
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(html_body.to_string()),
            );

        let builder = Message::builder()
            .from(self.config.from.parse()?)
            .to(recipient.parse()?)
            .subject(subject);

        let email = match attachment {
            Some(att) => {
                let content_type = ContentType::parse(&att.content_type).map_err(|e| {
                    PointSystemError::email_delivery(format!("非法附件类型: {e}"))
                })?;
                let part = Attachment::new(att.filename.clone()).body(att.data.clone(), content_type);
                builder
                    .multipart(MultiPart::mixed().multipart(alternative).singlepart(part))
            }
            None => builder.multipart(alternative),
        }
        .map_err(|e| PointSystemError::email_delivery(format!("构建邮件失败: {e}")))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
                .port(self.config.port);

        if !self.config.username.is_empty() {
            transport_builder = transport_builder.credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ));
        }

        let transport = transport_builder.build();
        transport.send(email).await?;

        info!(to = recipient, subject = subject, "Notification email sent");
        Ok(())
    }
}

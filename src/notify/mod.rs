//! 邮件通知模块
//!
//! - `mailer`: SMTP 发送器（lettre），host 未配置时整体关闭
//! - `coupon`: 奖励券 SVG 附件生成
//! - `message`: 积分通知邮件文案
//! - `fanout`: 五路收件人的声明式扇出与独立发送

pub mod coupon;
pub mod fanout;
pub mod mailer;
pub mod message;

pub use coupon::{CouponData, render_coupon_attachment};
pub use fanout::{PlannedNotification, build_fanout_plan, dispatch_notifications};
pub use mailer::{EmailAttachment, Mailer};
pub use message::{AwardMessage, build_award_message};

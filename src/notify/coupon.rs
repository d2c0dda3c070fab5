use super::mailer::EmailAttachment;

/// 奖励券渲染所需的全部元数据
#[derive(Debug, Clone)]
pub struct CouponData {
    pub points: i64,
    pub student_name: String,
    pub teacher_name: String,
    pub subject: Option<String>,
    pub date_string: String,
    pub school_logo_url: Option<String>,
    pub school_name: String,
    pub teacher_email: String,
    pub parent_email: Option<String>,
}

/// XML 文本转义
fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// 渲染奖励券 SVG 文档
pub fn render_coupon_svg(data: &CouponData) -> String {
    let subject = data.subject.as_deref().unwrap_or("General");
    let logo = match &data.school_logo_url {
        Some(url) => format!(
            r#"<image href="{}" x="24" y="24" width="64" height="64"/>"#,
            xml_escape(url)
        ),
        None => String::new(),
    };
    let parent_line = match &data.parent_email {
        Some(email) => format!(
            r#"<text x="24" y="268" class="meta">Parent contact: {}</text>"#,
            xml_escape(email)
        ),
        None => String::new(),
    };

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="320" viewBox="0 0 640 320">
  <style>
    .title {{ font: bold 28px sans-serif; fill: #1a3c6e; }}
    .points {{ font: bold 64px sans-serif; fill: #d97706; }}
    .name {{ font: 22px sans-serif; fill: #111827; }}
    .meta {{ font: 14px sans-serif; fill: #4b5563; }}
  </style>
  <rect x="4" y="4" width="632" height="312" rx="16" fill="#fffbeb" stroke="#d97706" stroke-width="4" stroke-dasharray="12 6"/>
  {logo}
  <text x="320" y="64" text-anchor="middle" class="title">{school}</text>
  <text x="320" y="150" text-anchor="middle" class="points">{points} E-TOKENS</text>
  <text x="320" y="192" text-anchor="middle" class="name">awarded to {student}</text>
  <text x="24" y="232" class="meta">Awarded by {teacher} ({subject}) — {teacher_email}</text>
  <text x="24" y="250" class="meta">Date: {date}</text>
  {parent_line}
</svg>
"##,
        logo = logo,
        school = xml_escape(&data.school_name),
        points = data.points,
        student = xml_escape(&data.student_name),
        teacher = xml_escape(&data.teacher_name),
        subject = xml_escape(subject),
        teacher_email = xml_escape(&data.teacher_email),
        date = xml_escape(&data.date_string),
        parent_line = parent_line,
    )
}

/// 渲染奖励券并打包为邮件附件
pub fn render_coupon_attachment(data: &CouponData) -> EmailAttachment {
    EmailAttachment {
        filename: "coupon.svg".to_string(),
        content_type: "image/svg+xml".to_string(),
        data: render_coupon_svg(data).into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon() -> CouponData {
        CouponData {
            points: 8,
            student_name: "Alice <A>".to_string(),
            teacher_name: "Mr. Brown".to_string(),
            subject: Some("Math".to_string()),
            date_string: "Mon Aug 03 2026".to_string(),
            school_logo_url: Some("https://cdn.example.com/logo.png".to_string()),
            school_name: "Northside Elementary".to_string(),
            teacher_email: "brown@school.test".to_string(),
            parent_email: Some("parent@x.com".to_string()),
        }
    }

    #[test]
    fn test_coupon_contains_award_metadata() {
        let svg = render_coupon_svg(&coupon());
        assert!(svg.contains("8 E-TOKENS"));
        assert!(svg.contains("Northside Elementary"));
        assert!(svg.contains("Mr. Brown"));
        assert!(svg.contains("Mon Aug 03 2026"));
        assert!(svg.contains("parent@x.com"));
    }

    #[test]
    fn test_coupon_escapes_markup() {
        let svg = render_coupon_svg(&coupon());
        assert!(svg.contains("Alice &lt;A&gt;"));
        assert!(!svg.contains("Alice <A>"));
    }

    #[test]
    fn test_coupon_without_optional_fields() {
        let mut data = coupon();
        data.subject = None;
        data.school_logo_url = None;
        data.parent_email = None;
        let svg = render_coupon_svg(&data);
        assert!(svg.contains("General"));
        assert!(!svg.contains("<image"));
        assert!(!svg.contains("Parent contact"));
    }

    #[test]
    fn test_attachment_is_svg() {
        let att = render_coupon_attachment(&coupon());
        assert_eq!(att.filename, "coupon.svg");
        assert_eq!(att.content_type, "image/svg+xml");
        assert!(!att.data.is_empty());
    }
}

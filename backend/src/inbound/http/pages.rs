//! HTML rendering for the registration form.
//!
//! Markup is assembled with `format!`; every interpolated value goes through
//! [`html_escape`] because messages and echoed input originate from clients.

/// Values shown on the registration page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterPage<'a> {
    /// Outcome of a previous successful submission.
    pub message: Option<&'a str>,
    /// Human-readable reason the last submission was rejected.
    pub error: Option<&'a str>,
    /// Phone number to pre-fill, as originally typed.
    pub phone_number: Option<&'a str>,
    /// Name to pre-fill, as originally typed.
    pub name: Option<&'a str>,
}

impl RegisterPage<'_> {
    /// Render the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let message = self
            .message
            .filter(|text| !text.is_empty())
            .map(|text| format!(r#"<p class="message">{}</p>"#, html_escape(text)))
            .unwrap_or_default();
        let error = self
            .error
            .filter(|text| !text.is_empty())
            .map(|text| format!(r#"<p class="error">{}</p>"#, html_escape(text)))
            .unwrap_or_default();
        let phone_number = html_escape(self.phone_number.unwrap_or_default());
        let name = html_escape(self.name.unwrap_or_default());

        format!(
            r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>사용자 등록 - 실내운전연습장 예약 관리 시스템</title>
    <style>
        body {{ font-family: sans-serif; max-width: 480px; margin: 40px auto; padding: 0 16px; }}
        label {{ display: block; margin-top: 12px; }}
        input {{ width: 100%; padding: 8px; box-sizing: border-box; }}
        button {{ margin-top: 16px; padding: 8px 16px; }}
        .message {{ color: #1a7f37; }}
        .error {{ color: #cf222e; }}
    </style>
</head>
<body>
    <h1>사용자 등록</h1>
    {message}
    {error}
    <form method="post" action="/register">
        <label for="phone_number">전화번호</label>
        <input type="text" id="phone_number" name="phone_number" value="{phone_number}" placeholder="010-1234-5678" required>
        <label for="name">이름</label>
        <input type="text" id="name" name="name" value="{name}" placeholder="홍길동" required>
        <button type="submit">등록</button>
    </form>
</body>
</html>"#
        )
    }
}

/// Escape text for safe inclusion in HTML content and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

use super::BASE_HEAD;

const ABOUT_BODY: &str = r#"<title>about</title>
</head>
<body>
<p class="h"><a href="/1" title="home">«</a></p>
<div class="n">about</div>
<div class="t">
    <p>original: <a href="http://cluetrain.com/">cluetrain.com</a></p>
    <p>source code: <a href="https://github.com/bbolli/bottle-cluetrain/">github.com/bbolli/bottle-cluetrain</a></p>
    <p>blog: <a href="https://drbeat.li/">beating the one-way web</a></p>
</div>
</body>
</html>
"#;

/// Static about page
pub fn render_about() -> String {
    format!("{BASE_HEAD}{ABOUT_BODY}")
}

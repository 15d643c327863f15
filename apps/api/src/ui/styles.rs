// Dark theme shared by every page.

pub const PAGE_STYLES: &str = r#"
body {
    background-color: #0a192f;
    color: #ffffff;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    margin: 0;
    padding: 0 24px 48px;
}
.container { max-width: 1200px; margin: 0 auto; }
.title {
    color: #64ffda;
    font-size: 36px;
    font-weight: bold;
    text-align: center;
    margin: 30px 0;
}
.subheader {
    color: #64ffda;
    font-size: 24px;
    font-weight: bold;
    margin-bottom: 20px;
}
.panel {
    background-color: #112240;
    padding: 20px;
    border-radius: 8px;
    border: 1px solid #233554;
    margin-bottom: 30px;
    line-height: 1.6;
}
.columns { display: flex; gap: 32px; flex-wrap: wrap; }
.column { flex: 1 1 420px; }
label { display: block; font-weight: 500; margin: 16px 0 8px; }
input[type=text], input[type=file], textarea {
    width: 100%;
    box-sizing: border-box;
    background-color: #112240;
    color: #ffffff;
    border: 1px solid #233554;
    border-radius: 8px;
    padding: 10px;
}
textarea { height: 200px; }
.actions { text-align: center; margin: 30px 0; }
button.primary {
    background-color: #64ffda;
    color: #0a192f;
    border: none;
    padding: 15px 30px;
    border-radius: 8px;
    font-weight: bold;
    font-size: 16px;
    min-width: 50%;
    cursor: pointer;
    transition: all 0.3s ease;
}
button.primary:hover {
    background-color: #4cd8b2;
    transform: translateY(-2px);
    box-shadow: 0 4px 12px rgba(100, 255, 218, 0.2);
}
button.download {
    background-color: #233554;
    color: #64ffda;
    border: 1px solid #64ffda;
    padding: 10px 20px;
    border-radius: 8px;
    font-weight: bold;
    cursor: pointer;
    transition: all 0.3s ease;
}
button.download:hover { background-color: #64ffda; color: #0a192f; }
.notice {
    background-color: #112240;
    border: 1px solid #233554;
    border-radius: 8px;
    padding: 15px;
    margin: 10px 0;
}
.notice.success { border-color: #64ffda; color: #64ffda; }
.notice.warning { border-color: #f4a261; color: #f4a261; }
.notice.error { border-color: #ff6b6b; color: #ff6b6b; }
.analysis-card {
    background-color: rgba(255, 255, 255, 0.05);
    border-radius: 10px;
    padding: 20px;
    margin: 10px 0;
    border: 1px solid rgba(255, 255, 255, 0.1);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.card-title {
    color: #64ffda;
    font-size: 1.2rem;
    font-weight: 600;
    margin-bottom: 15px;
}
.card-content { font-size: 1rem; line-height: 1.6; }
.bullet-point { display: flex; align-items: flex-start; gap: 10px; margin: 8px 0; padding-left: 10px; }
.bullet-icon { min-width: 20px; color: #64ffda; }
.score { font-size: 2rem; text-align: center; color: #64ffda; }
.section-divider {
    height: 1px;
    background: linear-gradient(to right, rgba(100, 255, 218, 0), rgba(100, 255, 218, 0.5), rgba(100, 255, 218, 0));
    margin: 30px 0;
}
a { color: #64ffda; }
"#;

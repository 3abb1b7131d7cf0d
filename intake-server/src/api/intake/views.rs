//! HTML 视图渲染
//!
//! 服务端直接拼接页面，不引入模板引擎。插入页面的动态内容只有
//! 校验消息和诊断结果，两者都来自固定的字符串集合。

/// 页面骨架
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }}
    label {{ display: block; margin-top: 1rem; }}
    input, textarea, select {{ width: 100%; box-sizing: border-box; padding: 0.4rem; }}
    button {{ margin-top: 1.5rem; padding: 0.5rem 1.5rem; }}
    ul.errors {{ color: #b00020; }}
    p.status {{ font-size: 1.25rem; font-weight: bold; }}
  </style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// 指示灯下拉框
fn light_select(name: &str, label: &str) -> String {
    format!(
        r#"  <label for="{name}">{label}</label>
  <select id="{name}" name="{name}">
    <option value="">-- select --</option>
    <option value="on">on</option>
    <option value="off">off</option>
    <option value="blinking">blinking</option>
  </select>
"#
    )
}

/// 报告表单页面，`errors` 非空时在表单上方渲染错误列表
pub fn render_form(errors: &[String]) -> String {
    let mut body = String::from("<h1>Device Status Report</h1>\n");

    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            body.push_str(&format!("  <li>{error}</li>\n"));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(
        r#"<form action="/process_input" method="post">
  <label for="user_id">User ID</label>
  <input id="user_id" name="user_id" type="text" maxlength="10">

  <label for="problem_description">Problem description</label>
  <textarea id="problem_description" name="problem_description" rows="4" maxlength="300"></textarea>

  <label for="device_serial_number">Device serial number</label>
  <input id="device_serial_number" name="device_serial_number" type="text" maxlength="64">

"#,
    );
    body.push_str(&light_select("light1", "Indicator light 1"));
    body.push_str(&light_select("light2", "Indicator light 2"));
    body.push_str(&light_select("light3", "Indicator light 3"));
    body.push_str("\n  <button type=\"submit\">Submit</button>\n</form>\n");

    page("Device Status Report", &body)
}

/// 提交成功后的诊断结果页面
pub fn render_status(response_status: &str) -> String {
    let body = format!(
        r#"<h1>Diagnostic Result</h1>
<p class="status">{response_status}</p>
<p><a href="/">Submit another report</a></p>
"#
    );
    page("Diagnostic Result", &body)
}

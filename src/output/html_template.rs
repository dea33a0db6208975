//! HTML template constants for the `HtmlFormatter`.

/// Document head and page styles, up to the opening of the container.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Codebase Guidelines Analysis</title>
    <style>
        :root {
            --color-passed: #27ae60;
            --color-warning: #f39c12;
            --color-failed: #e74c3c;
            --color-bg: #f5f5f5;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #2c3e50;
            --color-text-muted: #64748b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; background: var(--color-card); padding: 2rem; border-radius: 0.5rem; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; border-bottom: 2px solid var(--color-border); padding-bottom: 0.5rem; }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); }
        .summary-card.passed .value { color: var(--color-passed); }
        .summary-card.warning .value { color: var(--color-warning); }
        .summary-card.failed .value { color: var(--color-failed); }
        details.section { margin: 1rem 0; border: 1px solid var(--color-border); border-radius: 0.5rem; }
        details.section > summary { cursor: pointer; padding: 0.75rem 1rem; font-weight: 600; }
        .badge { display: inline-block; min-width: 1.5rem; padding: 0 0.5rem; border-radius: 9999px; background: var(--color-border); font-size: 0.75rem; text-align: center; }
        .badge.high { background: #fee2e2; color: #991b1b; }
        .badge.medium { background: #fef9c3; color: #854d0e; }
        .badge.low { background: #e2e8f0; color: #334155; }
        ul.entries { list-style: none; padding: 0 1rem 1rem; }
        ul.entries > li { margin: 0.625rem 0; padding: 0.625rem; border-radius: 0.25rem; }
        li.passed { background: #e8f5e9; }
        li.failed { background: #ffebee; }
        li.warning { background: #fff8e1; }
        li details > summary { cursor: pointer; }
        .file-list { margin-top: 0.5rem; font-family: 'SF Mono', SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace; font-size: 0.8125rem; }
        .file-entry { padding: 0.125rem 0; word-break: break-all; white-space: pre-wrap; }
        .details { margin-top: 0.5rem; font-size: 0.875rem; }
        .suggestion, .recommendation { margin-top: 0.5rem; padding: 0.75rem; background: #f0f9ff; border-radius: 0.375rem; }
        .recommendation ul { margin-left: 1.25rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Codebase Guidelines Analysis</h1>
"#;

pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>guideline-guard</strong>
        </div>
    </div>
</body>
</html>
"#;

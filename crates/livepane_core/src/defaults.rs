//! Starter content loaded into each buffer at startup.
//!
//! The markup is a full document on purpose: it ends up nested inside the
//! preview `<body>`, and browsers tolerate that.

/// Starter markup: a heading, a paragraph `#dynamic-text`, and a button `#myButton`.
pub const DEFAULT_MARKUP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Page</title>
</head>
<body>
    <h1>Hello from HTML!</h1>
    <p id="dynamic-text">This text will change.</p>
    <button id="myButton">Click me!</button>
</body>
</html>"#;

/// Starter stylesheet.
pub const DEFAULT_STYLE: &str = r#"body {
    font-family: 'Inter', sans-serif;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    background-color: #f0f0f0;
    color: #333;
    padding: 20px;
}
h1 {
    color: #4a90e2;
    margin-bottom: 20px;
}
p {
    font-size: 1.1em;
    color: #555;
}
button {
    background-color: #4CAF50; /* Green */
    color: white;
    padding: 10px 20px;
    border: none;
    border-radius: 5px;
    cursor: pointer;
    font-size: 1em;
    margin-top: 20px;
    transition: background-color 0.3s ease;
}
button:hover {
    background-color: #45a049;
}"#;

/// Starter script: counts clicks on `#myButton` into `#dynamic-text`.
pub const DEFAULT_SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', () => {
    const button = document.getElementById('myButton');
    const dynamicText = document.getElementById('dynamic-text');
    let clickCount = 0;

    if (button && dynamicText) {
        button.addEventListener('click', () => {
            clickCount++;
            dynamicText.textContent = `You clicked the button ${clickCount} time(s)!`;
            console.log(`Button clicked ${clickCount} times.`);
        });
    } else {
        console.error("Elements with IDs 'myButton' or 'dynamic-text' not found.");
    }
});"#;

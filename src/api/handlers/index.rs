//! Handler for the landing page.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>URL Shortener Microservice</title>
  <link rel="stylesheet" href="/public/style.css">
</head>
<body>
  <main>
    <h1>URL Shortener Microservice</h1>
    <form id="shorten" method="post">
      <label for="url">URL to be shortened</label>
      <input id="url" name="url" type="text" placeholder="https://www.freecodecamp.org" required>
      <button type="submit">Shorten</button>
    </form>
    <pre id="result"></pre>
  </main>
  <script>
    const form = document.getElementById('shorten');
    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const response = await fetch('/api/shorturl', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ url: document.getElementById('url').value }),
      });
      document.getElementById('result').textContent =
        JSON.stringify(await response.json(), null, 2);
    });
  </script>
</body>
</html>
"#;

/// Serves the submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

//! Server-rendered HTML pages.

use tunelith_core::MessageRecord;

const SITE_NAME: &str = "Tunelith";

const CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:#0f172a;color:#cbd5e1;font-family:'Segoe UI',system-ui,sans-serif;line-height:1.6}
a{color:#38bdf8;text-decoration:none}a:hover{text-decoration:underline}
.nav{background:#111827;border-bottom:1px solid #1f2937;padding:0.75rem 2rem;display:flex;align-items:center;gap:2rem}
.nav h1{font-size:1.2rem;color:#f8fafc}.nav a{color:#94a3b8}.nav a:hover{color:#f8fafc}
.container{max-width:1100px;margin:0 auto;padding:2rem 1.5rem}
.hero{text-align:center;padding:4rem 1rem}
.hero h2{font-size:2.5rem;color:#f8fafc}.hero p{color:#94a3b8;margin-top:1rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:1.25rem;margin:2rem 0}
.card{background:#111827;border:1px solid #1f2937;border-radius:8px;padding:1.5rem}
.card h3{color:#f8fafc;margin-bottom:0.5rem}
.stat{text-align:center}.stat strong{display:block;font-size:2rem;color:#38bdf8}
form{display:flex;flex-direction:column;gap:0.75rem;max-width:560px}
input,textarea{background:#0b1220;border:1px solid #1f2937;border-radius:6px;color:#e2e8f0;padding:0.6rem}
textarea{min-height:140px}
.btn{background:#0284c7;color:#fff;border:none;padding:0.6rem 1.2rem;border-radius:6px;cursor:pointer;align-self:flex-start}
#form-status{min-height:1.5rem}
table{width:100%;border-collapse:collapse}
th,td{text-align:left;padding:0.6rem;border-bottom:1px solid #1f2937;vertical-align:top}
th{color:#f8fafc}td.body{white-space:pre-wrap}
.muted{color:#64748b}
.error-box{background:#1f2937;border-radius:6px;padding:1rem;margin-top:1rem;white-space:pre-wrap;font-family:monospace}
"#;

const HOME_SCRIPT: &str = r#"
fetch('/api/stats').then(r => r.json()).then(stats => {
  for (const [key, value] of Object.entries(stats)) {
    const el = document.querySelector(`[data-stat="${key}"]`);
    if (el) el.textContent = value;
  }
}).catch(() => {});

document.getElementById('contact-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById('form-status');
  const response = await fetch(form.action, {
    method: 'POST',
    headers: { 'Accept': 'application/json' },
    body: new URLSearchParams(new FormData(form)),
  });
  const body = await response.json().catch(() => ({}));
  if (response.ok && body.success) {
    status.textContent = body.message;
    form.reset();
  } else {
    status.textContent = body.error || 'Erreur interne du serveur';
  }
});
"#;

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {SITE_NAME}</title>
<style>{CSS}</style>
</head>
<body>
<nav class="nav"><h1>{SITE_NAME}</h1><a href="/">Accueil</a><a href="/#contact">Contact</a><a href="/messages">Messages</a></nav>
{body}
</body>
</html>"#,
        title = escape_html(title),
    )
}

pub fn home_page() -> String {
    let services = [
        ("Sites web", "Sites vitrines et applications web rapides et accessibles."),
        ("Applications", "Outils métier sur mesure, du prototype à la production."),
        ("Accompagnement", "Conseil, maintenance et support au quotidien."),
    ]
    .iter()
    .map(|(title, text)| format!(r#"<div class="card"><h3>{title}</h3><p>{text}</p></div>"#))
    .collect::<String>();

    let stats = [
        ("projets_realises", "50", "Projets réalisés"),
        ("clients_satisfaits", "30", "Clients satisfaits"),
        ("annees_experience", "3", "Années d'expérience"),
        ("support", "24/7", "Support"),
    ]
    .iter()
    .map(|(key, value, label)| {
        format!(r#"<div class="card stat"><strong data-stat="{key}">{value}</strong>{label}</div>"#)
    })
    .collect::<String>();

    let body = format!(
        r#"<section class="hero">
<h2>Des solutions numériques sur mesure</h2>
<p>{SITE_NAME} conçoit et développe des sites et applications pour les entreprises qui veulent avancer vite.</p>
</section>
<div class="container">
<h2>Nos services</h2>
<div class="grid">{services}</div>
<h2>En chiffres</h2>
<div class="grid">{stats}</div>
<h2 id="contact">Contactez-nous</h2>
<form id="contact-form" action="/send_message" method="post">
<input name="name" placeholder="Votre nom" required>
<input name="email" type="email" placeholder="Votre email" required>
<textarea name="message" placeholder="Votre message" required></textarea>
<button class="btn" type="submit">Envoyer</button>
<p id="form-status" class="muted"></p>
</form>
</div>
<script>{HOME_SCRIPT}</script>"#
    );

    layout("Accueil", &body)
}

/// Admin listing; `messages` are expected newest first.
pub fn messages_page(messages: &[MessageRecord]) -> String {
    let mut body = format!(
        r#"<div class="container"><h2>Messages reçus ({})</h2>"#,
        messages.len()
    );

    if messages.is_empty() {
        body.push_str(r#"<div class="card"><p class="muted">Aucun message pour le moment.</p></div>"#);
    } else {
        body.push_str("<table><thead><tr><th>Date</th><th>Nom</th><th>Email</th><th>Message</th></tr></thead><tbody>");
        for m in messages {
            body.push_str(&format!(
                r#"<tr><td>{}</td><td>{}</td><td><a href="mailto:{email}">{email}</a></td><td class="body">{}</td></tr>"#,
                escape_html(&m.timestamp),
                escape_html(&m.name),
                escape_html(&m.message),
                email = escape_html(&m.email),
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str("</div>");

    layout("Messages", &body)
}

pub fn not_found_page() -> String {
    layout(
        "Page introuvable",
        r#"<section class="hero"><h2>404</h2><p>La page demandée n'existe pas.</p><p><a href="/">Retour à l'accueil</a></p></section>"#,
    )
}

/// Generic failure page. `detail` is rendered only when provided.
pub fn error_page(detail: Option<&str>) -> String {
    let detail = detail
        .map(|d| format!(r#"<div class="error-box">{}</div>"#, escape_html(d)))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="hero"><h2>500</h2><p>Une erreur interne est survenue. Merci de réessayer plus tard.</p>{detail}<p><a href="/">Retour à l'accueil</a></p></section>"#
    );
    layout("Erreur", &body)
}

//! HTTP handlers for the suggestion API.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::server::ServerState;

/// Suggestion request
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub habits: String,
    #[serde(default)]
    pub k: Option<usize>,
}

/// Suggestion response
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// Feedback request. A missing rating defaults to 0, which the engine
/// clamps to -1.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub habits: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub rating: i32,
}

/// Suggestion handler
pub async fn suggest_handler(
    State(state): State<ServerState>,
    Json(req): Json<SuggestRequest>,
) -> impl IntoResponse {
    let k = req.k.unwrap_or(state.default_k);
    let suggestions = state.suggester.suggest(&req.habits, k);
    (StatusCode::OK, Json(SuggestResponse { suggestions }))
}

/// Feedback handler
pub async fn feedback_handler(
    State(state): State<ServerState>,
    Json(req): Json<FeedbackRequest>,
) -> impl IntoResponse {
    let ok = state.suggester.update_feedback(&req.habits, &req.task, req.rating);
    (StatusCode::OK, Json(json!({ "ok": ok })))
}

/// Status handler
pub async fn status_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "name": crate::NAME,
            "version": crate::VERSION,
        })),
    )
}

/// Handler for the index page
pub async fn index_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Habit Suggester</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 700px;
            margin: 0 auto;
            padding: 20px;
            background: #1a1a1a;
            color: #e0e0e0;
        }
        h1 { color: #4CAF50; }
        textarea {
            width: 100%;
            min-height: 80px;
            background: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #444;
            border-radius: 8px;
            padding: 10px;
            font-size: 15px;
        }
        button {
            background: #4CAF50;
            color: #fff;
            border: none;
            border-radius: 6px;
            padding: 10px 16px;
            margin-top: 10px;
            cursor: pointer;
        }
        button:disabled { opacity: 0.6; }
        .suggestion {
            display: flex;
            align-items: center;
            gap: 12px;
            background: #2a2a2a;
            padding: 12px;
            margin: 10px 0;
            border-radius: 8px;
        }
        .badge {
            background: #333;
            border-radius: 50%;
            width: 28px;
            height: 28px;
            display: flex;
            align-items: center;
            justify-content: center;
            flex-shrink: 0;
        }
        .suggestion div:nth-child(2) { flex-grow: 1; }
        .thumb button { margin: 0 2px; background: #333; }
        #toast {
            position: fixed;
            bottom: 20px;
            left: 50%;
            transform: translateX(-50%);
            background: #333;
            padding: 10px 18px;
            border-radius: 8px;
            opacity: 0;
            transition: opacity 0.3s;
        }
        #toast.show { opacity: 1; }
    </style>
</head>
<body>
    <h1>Habit Suggester</h1>
    <p>Describe your habits or goals and get five small, actionable tasks.</p>
    <textarea id="habits" placeholder="e.g. I want to exercise more and read before bed"></textarea>
    <button id="generateBtn">Generate 5 actions</button>
    <div id="suggestions"></div>
    <div id="toast"></div>
    <script>
    async function fetchSuggestions() {
        const habits = document.getElementById("habits").value.trim();
        const btn = document.getElementById("generateBtn");
        btn.disabled = true;
        btn.innerText = "Thinking...";
        try {
            const res = await fetch("/suggest", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify({ habits })
            });
            const data = await res.json();
            renderSuggestions(data.suggestions || [], habits);
        } catch (e) {
            showToast("Something went wrong. Please try again.");
        } finally {
            btn.disabled = false;
            btn.innerText = "Generate 5 actions";
        }
    }

    function renderSuggestions(items, habits) {
        const container = document.getElementById("suggestions");
        container.innerHTML = "";
        items.forEach((text, idx) => {
            const card = document.createElement("div");
            card.className = "suggestion";
            const badge = document.createElement("div");
            badge.className = "badge";
            badge.textContent = idx + 1;
            const content = document.createElement("div");
            content.textContent = text;
            const thumb = document.createElement("div");
            thumb.className = "thumb";
            const up = document.createElement("button");
            up.textContent = "\u{1F44D}";
            up.title = "Helpful";
            const down = document.createElement("button");
            down.textContent = "\u{1F44E}";
            down.title = "Not helpful";
            up.onclick = () => sendFeedback(habits, text, 1);
            down.onclick = () => sendFeedback(habits, text, -1);
            thumb.appendChild(up);
            thumb.appendChild(down);
            card.appendChild(badge);
            card.appendChild(content);
            card.appendChild(thumb);
            container.appendChild(card);
        });
    }

    async function sendFeedback(habits, task, rating) {
        try {
            const res = await fetch("/feedback", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify({ habits, task, rating })
            });
            const data = await res.json();
            if (data.ok) {
                showToast(rating > 0
                    ? "Thanks! I'll suggest more like this."
                    : "Got it. I'll suggest fewer like this.");
            }
        } catch (e) {
            console.error(e);
        }
    }

    function showToast(msg) {
        const t = document.getElementById("toast");
        t.textContent = msg;
        t.classList.add("show");
        setTimeout(() => t.classList.remove("show"), 1800);
    }

    document.addEventListener("DOMContentLoaded", () => {
        document.getElementById("generateBtn").addEventListener("click", fetchSuggestions);
        document.getElementById("habits").addEventListener("keydown", (e) => {
            if (e.key === "Enter" && (e.ctrlKey || e.metaKey)) {
                fetchSuggestions();
            }
        });
    });
    </script>
</body>
</html>"#,
    )
}

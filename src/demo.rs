use chrono::{DateTime, Utc};

use crate::items::{Bookmark, Item, Note};

fn at(ts: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_default()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Sample bookmarks and notes. Ids are fixed so loading twice overwrites
/// instead of duplicating.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::Bookmark(Bookmark {
            id: "demo-bookmark-1".into(),
            title: "React Official Website".into(),
            url: "https://react.dev/".into(),
            description: Some(
                "The official documentation for React, the library for web and native user interfaces."
                    .into(),
            ),
            tags: tags(&["react", "javascript", "documentation", "frontend"]),
            created_at: at("2023-10-26T10:00:00Z"),
            updated_at: at("2023-10-26T10:00:00Z"),
            favicon_data_url: None,
        }),
        Item::Note(Note {
            id: "demo-note-1".into(),
            title: "Project Ideas Brainstorm".into(),
            content: r#"<h2>Meeting Notes - Project Nexus</h2>
<p>Here are the key takeaways from our brainstorm session:</p>
<ul>
  <li><strong>Feature 1:</strong> Offline-first capability is a must.</li>
  <li><strong>Feature 2:</strong> Implement a robust tagging system.</li>
  <li><strong>Feature 3:</strong> Advanced search with typo tolerance.</li>
</ul>
<p>Next steps: Draft initial UI mockups. Related: <a href="nexus-note://demo-note-2">Weekly Goals</a></p>"#
                .into(),
            tags: tags(&["project-nexus", "ideas", "meeting", "development"]),
            created_at: at("2023-10-25T14:30:00Z"),
            updated_at: at("2023-10-26T11:00:00Z"),
        }),
        Item::Bookmark(Bookmark {
            id: "demo-bookmark-2".into(),
            title: "Tailwind CSS - Rapidly build modern websites".into(),
            url: "https://tailwindcss.com/".into(),
            description: Some(
                "A utility-first CSS framework packed with classes that can be composed to build any design, directly in your markup."
                    .into(),
            ),
            tags: tags(&["css", "frontend", "design", "framework"]),
            created_at: at("2023-10-24T09:15:00Z"),
            updated_at: at("2023-10-24T09:15:00Z"),
            favicon_data_url: None,
        }),
        Item::Bookmark(Bookmark {
            id: "demo-bookmark-3".into(),
            title: "Quill - Your powerful rich text editor".into(),
            url: "https://quilljs.com/".into(),
            description: Some(
                "Quill is a modern WYSIWYG editor built for compatibility and extensibility.".into(),
            ),
            tags: tags(&["editor", "javascript", "library", "rich-text"]),
            created_at: at("2023-10-23T18:00:00Z"),
            updated_at: at("2023-10-23T18:00:00Z"),
            favicon_data_url: None,
        }),
        Item::Note(Note {
            id: "demo-note-2".into(),
            title: "Weekly Goals".into(),
            content: r#"<h3>Goals for this week:</h3>
<ol>
  <li>Finish the main feature implementation.</li>
  <li>Write comprehensive documentation.</li>
  <li>Prepare for the demo presentation.</li>
</ol>
<blockquote>"The best way to predict the future is to create it."</blockquote>"#
                .into(),
            tags: tags(&["productivity", "goals", "planning"]),
            created_at: at("2023-10-22T11:45:00Z"),
            updated_at: at("2023-10-26T09:00:00Z"),
        }),
    ]
}

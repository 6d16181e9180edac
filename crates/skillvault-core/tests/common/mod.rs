use skillvault_core::{Catalog, Certificate, ProjectReference};

/// Build a certificate with only the facet fields set
#[allow(dead_code)]
pub fn cert(id: &str, title: &str, platform: &str, field: &str, tags: &[&str]) -> Certificate {
    Certificate::new(
        id,
        title,
        platform,
        field,
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

/// The two-certificate catalog used by the scenario tests
#[allow(dead_code)]
pub fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        cert("1", "React Basics", "Udemy", "Web Dev", &["react", "js"]),
        cert("2", "Go Fundamentals", "Coursera", "Backend", &["go"]),
    ])
    .unwrap()
}

/// A fuller catalog with overlapping facets
#[allow(dead_code)]
pub fn gallery_catalog() -> Catalog {
    let mut mern = cert(
        "mern",
        "MERN Stack with Gen AI",
        "W3 Grads",
        "Web Development",
        &["html", "css", "javascript", "reactjs", "nodejs"],
    );
    mern.download_url = "/certificates/mern.pdf".to_string();
    mern.what_i_learned = "Full-stack development with AI integration".to_string();
    mern.projects = vec![
        ProjectReference::new("Krush AI", "https://krush-ai.vercel.app/"),
        ProjectReference::new("OpenShelf", "https://openshelf-beige.vercel.app/"),
    ];

    Catalog::new(vec![
        mern,
        cert("py", "Python for Everybody", "Coursera", "Programming", &["python"]),
        cert("sql", "SQL Essentials", "Udemy", "Data", &["sql", "python"]),
        cert("git", "Git & GitHub", "Udemy", "Web Development", &["git", "github"]),
    ])
    .unwrap()
}

/// JSON text of a single valid catalog entry
#[allow(dead_code)]
pub fn entry_json(id: &str, title: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "title": "{title}",
            "platform": "Udemy",
            "field": "Web Dev",
            "tags": ["react"],
            "certificateUrl": "/certificates/{id}.pdf",
            "downloadUrl": "/certificates/{id}.pdf",
            "thumbnailUrl": "/certificates/thumbnails/{id}.png",
            "whatILearned": "Things",
            "projects": []
        }}"#
    )
}

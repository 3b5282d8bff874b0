use crate::models::{Category, ProjectRecord};

/// Hand-authored projects shown when the repository listing is empty or unreachable
pub fn fallback_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            title: "Template Pesan Makanan Mobile".to_string(),
            description: "Aplikasi mobile untuk pemesanan makanan menggunakan Flutter dan Dart. \
                          Implementasi UI modern dan fitur pemesanan yang lengkap."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=600&auto=format&fit=crop&q=60"
                .to_string(),
            technologies: vec!["Flutter".to_string(), "Dart".to_string()],
            category: Category::MobileApp,
            source_url: "https://github.com/Galang0304/tamplate_pesanmakanan_mobile".to_string(),
        },
        ProjectRecord {
            title: "Login Mobile App".to_string(),
            description: "Aplikasi Android dengan sistem autentikasi. \
                          Menggunakan Kotlin dan implementasi UI yang user-friendly."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1616469829581-73993eb86b02?w=600&auto=format&fit=crop&q=60"
                .to_string(),
            technologies: vec!["Kotlin".to_string(), "Android".to_string()],
            category: Category::MobileApp,
            source_url: "https://github.com/Galang0304/login_mobile".to_string(),
        },
    ]
}

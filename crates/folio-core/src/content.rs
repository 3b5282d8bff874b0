//! Static profile content rendered around the project gallery

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    /// Shown next to the project counters as "N+ Years Coding"
    pub years_coding: u8,
    pub education: Vec<Affiliation>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub tech_stack: Vec<TechGroup>,
    pub journey: Vec<Milestone>,
    pub achievements: Vec<Achievement>,
    pub blog_posts: Vec<BlogPost>,
    pub links: Vec<SocialLink>,
}

/// School or organisation entry of the about section
#[derive(Debug, Clone, Serialize)]
pub struct Affiliation {
    pub name: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// Skill bar; `progress` is a percentage in 0..=100
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechGroup {
    pub group: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub image_url: &'static str,
    pub excerpt: &'static str,
}

/// Social profile; links without a published address have no `url`
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: Option<&'static str>,
}

/// The portfolio owner's profile
pub fn profile() -> Profile {
    Profile {
        name: "Andi Arya Galang",
        role: "Frontend & Mobile Developer",
        tagline: "Crafting beautiful web experiences & exploring the world of mobile development",
        about: "Seorang mahasiswa Teknik Informatika semester 6 di Universitas Muhammadiyah Makassar \
                yang passionate dalam pengembangan aplikasi mobile dan web. Aktif mengembangkan diri \
                melalui proyek-proyek teknologi dan organisasi IT.",
        years_coding: 2,
        education: vec![
            Affiliation {
                name: "Universitas Muhammadiyah Makassar",
                details: "Teknik Informatika \u{2022} Semester 6 \u{2022} 2021 - Sekarang",
            },
            Affiliation {
                name: "COCONUT Research Group",
                details: "Anggota aktif di Computer Club Oriented Network, Utility & Technology, \
                          sebuah kelompok riset yang berfokus pada pengembangan teknologi dan \
                          inovasi di bidang IT.",
            },
        ],
        experience: vec![
            Experience {
                role: "Frontend Developer",
                company: "Freelance",
                period: "2023 - Present",
                description: "Mengembangkan berbagai aplikasi web menggunakan React, Next.js, dan TypeScript.",
            },
            Experience {
                role: "Junior Mobile Developer",
                company: "Self-employed",
                period: "2023 - Present",
                description: "Belajar dan mengembangkan aplikasi mobile dengan Flutter dan Kotlin.",
            },
        ],
        skills: vec![
            Skill { name: "Android Development (Kotlin)", progress: 80 },
            Skill { name: "Flutter & Dart", progress: 70 },
            Skill { name: "Frontend Web Dev", progress: 75 },
            Skill { name: "PHP & MySQL", progress: 70 },
            Skill { name: "Version Control (Git)", progress: 75 },
        ],
        tech_stack: vec![
            TechGroup { group: "frontend", items: vec!["HTML", "CSS", "JavaScript"] },
            TechGroup { group: "mobile", items: vec!["Kotlin", "Flutter", "Dart"] },
            TechGroup { group: "backend", items: vec!["PHP", "MySQL"] },
            TechGroup { group: "tools", items: vec!["Git", "VS Code", "Android Studio"] },
        ],
        journey: vec![
            Milestone {
                year: "2024",
                title: "Flutter Development",
                description: "Memulai pengembangan aplikasi mobile dengan Flutter dan Dart. \
                              Berhasil membuat aplikasi e-wallet sebagai proyek pertama dengan fitur transfer dan manajemen saldo.",
            },
            Milestone {
                year: "2023",
                title: "Android Development",
                description: "Belajar pengembangan aplikasi Android native dengan Kotlin. \
                              Membuat berbagai aplikasi dasar termasuk sistem login dan aplikasi pembelajaran.",
            },
            Milestone {
                year: "2022",
                title: "Web Development",
                description: "Mempelajari pengembangan web dengan HTML, CSS, JavaScript, PHP, dan MySQL. \
                              Membuat sistem informasi data mahasiswa.",
            },
        ],
        achievements: vec![
            Achievement {
                title: "First Flutter App: E-Wallet",
                description: "Berhasil membuat aplikasi e-wallet dengan Flutter, \
                              mengimplementasikan fitur transfer dan manajemen saldo",
            },
            Achievement {
                title: "Web Development",
                description: "Menguasai dasar-dasar pengembangan web modern dengan React dan TypeScript",
            },
            Achievement {
                title: "Mobile Development Journey",
                description: "Mengembangkan kemampuan mobile development dari Kotlin hingga Flutter",
            },
        ],
        blog_posts: vec![
            BlogPost {
                title: "Membuat E-Wallet dengan Flutter",
                date: "15 Maret 2024",
                image_url: "https://images.unsplash.com/photo-1614680376573-df3480f0c6ff?w=600&auto=format&fit=crop&q=60",
                excerpt: "Pengalaman dan pembelajaran dari pembuatan aplikasi e-wallet pertama saya menggunakan Flutter.",
            },
            BlogPost {
                title: "Best Practices dalam React Development",
                date: "10 Maret 2024",
                image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=600&auto=format&fit=crop&q=60",
                excerpt: "Kumpulan praktik terbaik yang saya terapkan dalam development React.",
            },
            BlogPost {
                title: "Optimasi Performa Aplikasi Web",
                date: "5 Maret 2024",
                image_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=600&auto=format&fit=crop&q=60",
                excerpt: "Teknik dan strategi untuk meningkatkan performa aplikasi web.",
            },
        ],
        links: vec![
            SocialLink { label: "GitHub", url: Some("https://github.com/Galang0304") },
            SocialLink { label: "LinkedIn", url: None },
            SocialLink { label: "Twitter", url: None },
            SocialLink { label: "Instagram", url: None },
        ],
    }
}

//! Static content of the portfolio. Edit this module to customize the site.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub resume_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: &'static str,
}

/// A technology shown as an icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechBadge {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyItem {
    pub period: &'static str,
    pub organization: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyGroup {
    pub title: &'static str,
    pub gradient: &'static str,
    pub items: &'static [JourneyItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub tech_stack: &'static [&'static str],
    pub category: &'static str,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Project {
    /// The live demo link, if the project has a real one. `"#"` marks a
    /// project without a deployment.
    #[must_use]
    pub fn live_link(&self) -> Option<&'static str> {
        self.live_url.filter(|url| !url.is_empty() && *url != "#")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub image: Option<&'static str>,
    /// ISO 8601 calendar date.
    pub issued_date: &'static str,
    pub expiry_date: Option<&'static str>,
}

impl Certificate {
    #[must_use]
    pub fn issued_on(&self) -> Option<NaiveDate> {
        parse_date(self.issued_date)
    }

    #[must_use]
    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expiry_date.and_then(parse_date)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: &'static str,
    pub github: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub name: &'static str,
    /// In-page anchor id, without the leading `#`.
    pub section_id: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

/// Section anchors, in document order. The navbar and the scroll-spy both
/// read this list.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Home",
        section_id: "home",
    },
    NavLink {
        name: "About",
        section_id: "about",
    },
    NavLink {
        name: "Projects",
        section_id: "projects",
    },
    NavLink {
        name: "Certificates",
        section_id: "certificates",
    },
    NavLink {
        name: "Contact",
        section_id: "contact",
    },
];

/// Everything the section views render. Built at compile time, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    pub personal: PersonalInfo,
    pub typing_phrases: &'static [&'static str],
    pub skills: &'static [Skill],
    pub languages: &'static [TechBadge],
    pub frameworks: &'static [TechBadge],
    pub tools: &'static [TechBadge],
    pub familiar_tools: &'static [TechBadge],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub journey: &'static [JourneyGroup],
    pub projects: &'static [Project],
    pub certificates: &'static [Certificate],
    pub contact: ContactInfo,
    /// Where the full project list lives.
    pub projects_gallery_url: &'static str,
    /// Where the full certificate list lives.
    pub certificates_gallery_url: &'static str,
}

impl ContentCatalog {
    /// The preamble sent to the chat model ahead of every conversation.
    #[must_use]
    pub fn chatbot_context(&self) -> String {
        let name = self.personal.name;
        let names = |badges: &[TechBadge], limit: usize| {
            badges
                .iter()
                .take(limit)
                .map(|badge| badge.name)
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "\nKamu adalah asisten AI di portfolio website milik {name}. \n\
             Kamu bertugas menjawab pertanyaan pengunjung tentang {name}.\n\
             \n\
             Informasi tentang {name}:\n\
             - Profesi: {title}\n\
             - Deskripsi: {description}\n\
             - Skills utama: Frontend Development, Backend Development, UI/UX Design\n\
             - Bahasa pemrograman: {languages}\n\
             - Framework: {frameworks}\n\
             - Tools: {tools}\n\
             - Email: {email}\n\
             - GitHub: {github}\n\
             - LinkedIn: {linkedin}\n\
             \n\
             Jawab dengan ramah, singkat, dan informatif. Gunakan bahasa Indonesia.\n\
             Jika ditanya hal di luar konteks portfolio, arahkan kembali ke topik portfolio.\n",
            title = self.personal.title,
            description = self.personal.description,
            languages = names(self.languages, 5),
            frameworks = names(self.frameworks, 6),
            tools = names(self.tools, 6),
            email = self.contact.email,
            github = self.contact.github,
            linkedin = self.contact.linkedin,
        )
    }
}

pub static PORTFOLIO: ContentCatalog = ContentCatalog {
    personal: PersonalInfo {
        name: "Helmi Putra",
        title: "Full Stack Developer & ML Enthusiast",
        tagline: "Building intelligent digital solutions with clean code & machine learning",
        description: "an Informatics Engineering student at UNNES specializing in Web Development and Machine Learning. With a strong background in campus tech organizations and professional certifications from BNSP, MikroTik, and Cisco, I bridge technical expertise with collaborative problem-solving to build impactful digital solutions.",
        avatar: "/foto.png",
        resume_url: "https://drive.google.com/file/d/1BLbthrGEQosxFgNn2ZRtZICWU7JvCWRI/view?usp=sharing",
    },
    typing_phrases: &["FullStack", "Frontend", "Backend"],
    skills: &[
        Skill { name: "Frontend Development", level: 90, icon: "frontend" },
        Skill { name: "Backend Development", level: 85, icon: "backend" },
        Skill { name: "Machine Learning", level: 75, icon: "ml" },
        Skill { name: "Database Management", level: 80, icon: "database" },
        Skill { name: "DevOps & Deployment", level: 70, icon: "devops" },
        Skill { name: "Mobile Development", level: 65, icon: "mobile" },
    ],
    languages: &[
        TechBadge { name: "JavaScript", icon: "SiJavascript", color: "#F7DF1E" },
        TechBadge { name: "TypeScript", icon: "SiTypescript", color: "#3178C6" },
        TechBadge { name: "Python", icon: "SiPython", color: "#3776AB" },
        TechBadge { name: "PHP", icon: "SiPhp", color: "#777BB4" },
        TechBadge { name: "Java", icon: "SiOpenjdk", color: "#ED8B00" },
        TechBadge { name: "HTML5", icon: "SiHtml5", color: "#E34F26" },
        TechBadge { name: "CSS3", icon: "SiCss3", color: "#1572B6" },
    ],
    frameworks: &[
        TechBadge { name: "React", icon: "SiReact", color: "#61DAFB" },
        TechBadge { name: "Next.js", icon: "SiNextdotjs", color: "#ffffff" },
        TechBadge { name: "Node.js", icon: "SiNodedotjs", color: "#339933" },
        TechBadge { name: "Express", icon: "SiExpress", color: "#ffffff" },
        TechBadge { name: "Laravel", icon: "SiLaravel", color: "#FF2D20" },
        TechBadge { name: "Tailwind CSS", icon: "SiTailwindcss", color: "#06B6D4" },
        TechBadge { name: "Bootstrap", icon: "SiBootstrap", color: "#7952B3" },
        TechBadge { name: "Vite", icon: "SiVite", color: "#646CFF" },
    ],
    tools: &[
        TechBadge { name: "Git", icon: "SiGit", color: "#F05032" },
        TechBadge { name: "GitHub", icon: "SiGithub", color: "#ffffff" },
        TechBadge { name: "VS Code", icon: "SiVscodium", color: "#007ACC" },
        TechBadge { name: "Figma", icon: "SiFigma", color: "#F24E1E" },
        TechBadge { name: "Docker", icon: "SiDocker", color: "#2496ED" },
        TechBadge { name: "Postman", icon: "SiPostman", color: "#FF6C37" },
        TechBadge { name: "MySQL", icon: "SiMysql", color: "#4479A1" },
        TechBadge { name: "MongoDB", icon: "SiMongodb", color: "#47A248" },
        TechBadge { name: "Firebase", icon: "SiFirebase", color: "#FFCA28" },
        TechBadge { name: "Vercel", icon: "SiVercel", color: "#ffffff" },
    ],
    familiar_tools: &[
        TechBadge { name: "PHP", icon: "SiPhp", color: "#777BB4" },
        TechBadge { name: "Laravel", icon: "SiLaravel", color: "#FF2D20" },
        TechBadge { name: "JavaScript", icon: "SiJavascript", color: "#F7DF1E" },
        TechBadge { name: "Vue", icon: "SiVuedotjs", color: "#4FC08D" },
        TechBadge { name: "React", icon: "SiReact", color: "#61DAFB" },
        TechBadge { name: "Next.js", icon: "SiNextdotjs", color: "#ffffff" },
        TechBadge { name: "Tailwind", icon: "SiTailwindcss", color: "#06B6D4" },
        TechBadge { name: "Bootstrap", icon: "SiBootstrap", color: "#7952B3" },
        TechBadge { name: "MySQL", icon: "SiMysql", color: "#4479A1" },
        TechBadge { name: "PostgreSQL", icon: "SiPostgresql", color: "#4169E1" },
        TechBadge { name: "HTML", icon: "SiHtml5", color: "#E34F26" },
        TechBadge { name: "CSS", icon: "SiCss3", color: "#1572B6" },
        TechBadge { name: "Node.js", icon: "SiNodedotjs", color: "#339933" },
        TechBadge { name: "C++", icon: "SiCplusplus", color: "#00599C" },
        TechBadge { name: "Git", icon: "SiGit", color: "#F05032" },
        TechBadge { name: "Python", icon: "SiPython", color: "#3776AB" },
        TechBadge { name: "Java", icon: "FaJava", color: "#ED8B00" },
        TechBadge { name: "Figma", icon: "SiFigma", color: "#F24E1E" },
        TechBadge { name: "Docker", icon: "SiDocker", color: "#2496ED" },
        TechBadge { name: "Canva", icon: "SiCanva", color: "#00C4CC" },
        TechBadge { name: "Photoshop", icon: "SiAdobephotoshop", color: "#31A8FF" },
    ],
    experience: &[
        Experience {
            title: "Full Stack Developer",
            company: "Tech Company",
            period: "2024 - Present",
            description: "Mengembangkan dan memelihara aplikasi web full-stack menggunakan React, Node.js, dan PostgreSQL. Berkolaborasi dengan tim desain untuk implementasi UI/UX.",
        },
        Experience {
            title: "Frontend Developer",
            company: "Digital Agency",
            period: "2023 - 2024",
            description: "Membangun antarmuka pengguna yang responsif dan interaktif menggunakan React dan Tailwind CSS. Mengoptimalkan performa web dan SEO.",
        },
        Experience {
            title: "Junior Web Developer",
            company: "Startup Inc",
            period: "2022 - 2023",
            description: "Memulai karir sebagai web developer dengan fokus pada HTML, CSS, JavaScript. Belajar dan mengimplementasikan berbagai framework modern.",
        },
    ],
    education: &[
        Education {
            degree: "Sarjana Teknik Informatika",
            school: "Universitas Teknologi",
            period: "2020 - 2024",
            description: "Fokus pada pengembangan perangkat lunak dan kecerdasan buatan. IPK 3.75/4.00.",
        },
        Education {
            degree: "SMA/SMK",
            school: "SMK Teknologi",
            period: "2017 - 2020",
            description: "Jurusan Rekayasa Perangkat Lunak (RPL).",
        },
    ],
    journey: &[
        JourneyGroup {
            title: "Internship",
            gradient: "linear-gradient(135deg, #2563eb, #3b82f6)",
            items: &[
                JourneyItem {
                    period: "2026",
                    organization: "Badan Kepegawaian Daerah Provinsi Jawa Tengah",
                    role: "Backend Developer Intern",
                },
                JourneyItem {
                    period: "2021",
                    organization: "CV. Bumi Web",
                    role: "Technical Support Intern",
                },
            ],
        },
        JourneyGroup {
            title: "Organization",
            gradient: "linear-gradient(135deg, #2563eb, #3b82f6)",
            items: &[
                JourneyItem {
                    period: "2023 - 2024",
                    organization: "Google Developer Student Clubs UNNES",
                    role: "Member of GDSC UNNES",
                },
                JourneyItem {
                    period: "2024 - 2025",
                    organization: "I-Secret Ilmu Komputer UNNES",
                    role: "Staff of Networking Division",
                },
                JourneyItem {
                    period: "2024 - 2025",
                    organization: "Google Developer Group of Campus ITS",
                    role: "Member of GDGoC ITS",
                },
                JourneyItem {
                    period: "2025 - 2026",
                    organization: "UKM Riptek UNNES",
                    role: "Staff of IT Development Division",
                },
            ],
        },
        JourneyGroup {
            title: "Committee",
            gradient: "linear-gradient(135deg, #1e40af, #3b82f6)",
            items: &[
                JourneyItem {
                    period: "2025",
                    organization: "UKM Riptek UNNES",
                    role: "Technical Mentor IT Development Division of DevXperience 2025",
                },
                JourneyItem {
                    period: "2024",
                    organization: "I-Secret Ilmu Komputer UNNES",
                    role: "Public Relations Division of Grand Launching Workshop PKM 2024",
                },
                JourneyItem {
                    period: "2024",
                    organization: "HIMA Ilmu Komputer UNNES",
                    role: "Equipment Division of INTERFACE 2024",
                },
            ],
        },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Kopi Senja - Integrated Web Ordering System",
            description: "Sebuah platform web modern dan responsif untuk manajemen kedai kopi, dilengkapi dengan fitur landing page yang interaktif, sistem pemesanan menu, dan ringkasan pesanan untuk meningkatkan pengalaman pelanggan.",
            image: Some("/projects/kopisenja.png"),
            tech_stack: &["React", "Framer Motion", "Tailwind CSS"],
            category: "Frontend",
            live_url: Some("https://kopi-senja-akbar-digital.vercel.app/"),
            github_url: Some("https://github.com/helmiiputraa/kopi-senja-akbar-digital"),
        },
        Project {
            id: 2,
            title: "Calmind - AI Powered Mental Support Hub",
            description: "Hadir sebagai solusi digital untuk kesehatan mental, Calmind mengintegrasikan fitur Mood Analysis, journaling, konsultasi profesional, AI Chatbot, hingga ruang komunitas berbagi cerita. Karya ini menjadi perwakilan resmi kampus dalam ajang bergengsi Gemastik XVIII-2025 pada Divisi RPL.",
            image: Some("/projects/homecalmind.png"),
            tech_stack: &["Laravel", "Tailwind CSS", "Axios", "MySQL", "Flask"],
            category: "Full Stack",
            live_url: Some("#"),
            github_url: Some("https://github.com/helmiiputraa/Gemastik/tree/master"),
        },
        Project {
            id: 3,
            title: "FitAja - Integrated Gym Management System",
            description: "Sistem manajemen gym end-to-end untuk mengelola membership, alat, jadwal, dan transaksi, lengkap dengan fitur progress tracking. Meraih predikat Project Terbaik pada mata kuliah Pemrograman Web.",
            image: Some("/projects/fitaja.png"),
            tech_stack: &["Laravel", "MySQL", "Tailwind CSS"],
            category: "Fullstack",
            live_url: Some("#"),
            github_url: Some("https://github.com/nerveign/gym-manager"),
        },
        Project {
            id: 4,
            title: "Weather Dashboard",
            description: "Dashboard cuaca interaktif yang menampilkan prakiraan cuaca, peta cuaca, dan data historis. Menggunakan API OpenWeatherMap.",
            image: Some("/projects/project4.jpg"),
            tech_stack: &["React", "Chart.js", "OpenWeather API", "CSS Modules"],
            category: "Frontend",
            live_url: Some("https://example.com"),
            github_url: Some("https://github.com/username/weather"),
        },
        Project {
            id: 5,
            title: "REST API Service",
            description: "RESTful API service untuk manajemen data dengan autentikasi JWT, rate limiting, dan dokumentasi Swagger.",
            image: Some("/projects/project5.jpg"),
            tech_stack: &["Node.js", "Express", "MySQL", "JWT", "Swagger"],
            category: "Backend",
            live_url: Some("https://example.com"),
            github_url: Some("https://github.com/username/api-service"),
        },
    ],
    certificates: &[
        Certificate {
            id: 1,
            name: "Alibaba Cloud Certified Developers",
            issuer: "Alibaba Cloud Academy",
            image: Some("/certificates/alibaba.jpg"),
            issued_date: "2024-07-07",
            expiry_date: Some("2027-07-07"),
        },
        Certificate {
            id: 2,
            name: "CCNA Cisco",
            issuer: "Cisco Networking Academy",
            image: Some("/certificates/cisco.jpg"),
            issued_date: "2025-02-16",
            expiry_date: None,
        },
        Certificate {
            id: 3,
            name: "Front-End Web Development",
            issuer: "Dicoding Indonesia",
            image: Some("/certificates/dicoding.jpg"),
            issued_date: "2025-09-25",
            expiry_date: Some("2028-09-25"),
        },
        Certificate {
            id: 4,
            name: "Front-End Web Level Expert",
            issuer: "IDCamp 2025",
            image: Some("/certificates/idcamp.jpg"),
            issued_date: "2025-07-10",
            expiry_date: None,
        },
        Certificate {
            id: 5,
            name: "Dasar dan Penggunaan Generatif AI",
            issuer: "Codepolitan",
            image: Some("/certificates/codepolitan.jpg"),
            issued_date: "2025-06-23",
            expiry_date: Some("2028-06-23"),
        },
        Certificate {
            id: 6,
            name: "Explore Generative AI",
            issuer: "Microsoft",
            image: Some("/certificates/microsoft.jpg"),
            issued_date: "2025-05-23",
            expiry_date: None,
        },
    ],
    contact: ContactInfo {
        email: "helmipratama117@gmail.com",
        github: "https://github.com/helmiiputraa",
        instagram: "https://instagram.com/helmiiputraa",
        linkedin: "https://www.linkedin.com/in/helmi-putra-noor-pratama",
    },
    projects_gallery_url: "https://github.com/helmiiputraa",
    certificates_gallery_url: "https://drive.google.com/drive/folders/1OcawKahau5tciAWqgENVzF7cjTVPH1XU?usp=sharing",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_live_urls_are_not_links() {
        let calmind = PORTFOLIO.projects.iter().find(|p| p.id == 2).unwrap();
        assert_eq!(calmind.live_link(), None);
        assert_eq!(
            PORTFOLIO.projects[0].live_link(),
            Some("https://kopi-senja-akbar-digital.vercel.app/")
        );
    }

    #[test]
    fn certificate_dates_parse() {
        for certificate in PORTFOLIO.certificates {
            assert!(certificate.issued_on().is_some(), "{}", certificate.name);
            assert_eq!(
                certificate.expires_on().is_some(),
                certificate.expiry_date.is_some()
            );
        }
    }

    #[test]
    fn chatbot_context_mentions_owner_and_contacts() {
        let context = PORTFOLIO.chatbot_context();
        assert!(context.contains("portfolio website milik Helmi Putra"));
        assert!(context.contains("- Email: helmipratama117@gmail.com"));
        assert!(context.contains("- Bahasa pemrograman: JavaScript, TypeScript, Python, PHP, Java"));
        assert!(context.contains("- Tools: Git, GitHub, VS Code, Figma, Docker, Postman"));
    }
}

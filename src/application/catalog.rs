//! Static catalog data: services, pricing plans, FAQ entries and blog posts.
//!
//! Loaded as code-defined tables, never persisted. Orders reference catalog
//! entries by key but stay valid even if the key no longer resolves, so a
//! retired entry never blocks order handling.

use serde::Serialize;

use crate::language::UserLanguage;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Localized {
    pub vi: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn for_lang(&self, lang: UserLanguage) -> &'static str {
        match lang {
            UserLanguage::Vi => self.vi,
            UserLanguage::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceInfo {
    pub id: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub name: Localized,
    pub description: Localized,
    pub features: &'static [Localized],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanInfo {
    pub id: &'static str,
    pub name: Localized,
    /// Prices in VND.
    pub price_monthly: i64,
    pub price_yearly: i64,
    pub popular: bool,
    pub features: &'static [Localized],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqEntry {
    pub question: Localized,
    pub answer: Localized,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    pub id: i64,
    pub slug: &'static str,
    pub author: &'static str,
    pub published_at: &'static str,
    pub title: Localized,
    pub excerpt: Localized,
}

const SERVICES: &[ServiceInfo] = &[
    ServiceInfo {
        id: "schedule",
        icon: "calendar",
        category: "productivity",
        name: Localized {
            vi: "Xếp lịch học tập",
            en: "Schedule Management",
        },
        description: Localized {
            vi: "Tự động sắp xếp lịch học, thi và deadline một cách khoa học.",
            en: "Automatically organize study schedules, exams and deadlines scientifically.",
        },
        features: &[
            Localized {
                vi: "Đồng bộ Google Calendar",
                en: "Google Calendar sync",
            },
            Localized {
                vi: "Nhắc nhở thông minh",
                en: "Smart reminders",
            },
            Localized {
                vi: "Phân tích thời gian",
                en: "Time analysis",
            },
        ],
    },
    ServiceInfo {
        id: "memes",
        icon: "smile",
        category: "entertainment",
        name: Localized {
            vi: "Meme Pack",
            en: "Meme Pack",
        },
        description: Localized {
            vi: "Bộ sưu tập meme độc quyền cho sinh viên để giải stress.",
            en: "Exclusive meme collection for students to relieve stress.",
        },
        features: &[
            Localized {
                vi: "Meme mới hàng tuần",
                en: "Weekly new memes",
            },
            Localized {
                vi: "Tùy chỉnh theo ngành",
                en: "Major-specific content",
            },
            Localized {
                vi: "Chia sẻ dễ dàng",
                en: "Easy sharing",
            },
        ],
    },
    ServiceInfo {
        id: "documents",
        icon: "book",
        category: "education",
        name: Localized {
            vi: "Tài liệu học tập",
            en: "Study Materials",
        },
        description: Localized {
            vi: "Thư viện tài liệu chất lượng cao được biên soạn bởi các anh chị khóa trước.",
            en: "High-quality document library compiled by senior students.",
        },
        features: &[
            Localized {
                vi: "Đáp án chi tiết",
                en: "Detailed answers",
            },
            Localized {
                vi: "Video giải thích",
                en: "Explanation videos",
            },
            Localized {
                vi: "Cập nhật liên tục",
                en: "Regular updates",
            },
        ],
    },
    ServiceInfo {
        id: "other",
        icon: "settings",
        category: "support",
        name: Localized {
            vi: "Dịch vụ khác",
            en: "Other Services",
        },
        description: Localized {
            vi: "Các dịch vụ hỗ trợ khác như tư vấn học tập, làm CV, tìm việc.",
            en: "Other support services like academic consulting, CV creation, job hunting.",
        },
        features: &[
            Localized {
                vi: "Tư vấn 1-1",
                en: "1-on-1 consultation",
            },
            Localized {
                vi: "Mẫu CV chuyên nghiệp",
                en: "Professional CV templates",
            },
            Localized {
                vi: "Kết nối việc làm",
                en: "Job connections",
            },
        ],
    },
];

const PLANS: &[PlanInfo] = &[
    PlanInfo {
        id: "free",
        name: Localized {
            vi: "Miễn phí",
            en: "Free",
        },
        price_monthly: 0,
        price_yearly: 0,
        popular: false,
        features: &[
            Localized {
                vi: "Xếp lịch cơ bản",
                en: "Basic scheduling",
            },
            Localized {
                vi: "5 meme/tuần",
                en: "5 memes/week",
            },
            Localized {
                vi: "Tài liệu giới hạn",
                en: "Limited documents",
            },
            Localized {
                vi: "Hỗ trợ email",
                en: "Email support",
            },
        ],
    },
    PlanInfo {
        id: "basic",
        name: Localized {
            vi: "Cơ bản",
            en: "Basic",
        },
        price_monthly: 99_000,
        price_yearly: 990_000,
        popular: true,
        features: &[
            Localized {
                vi: "Xếp lịch thông minh",
                en: "Smart scheduling",
            },
            Localized {
                vi: "Meme không giới hạn",
                en: "Unlimited memes",
            },
            Localized {
                vi: "Tài liệu đầy đủ",
                en: "Full documents",
            },
            Localized {
                vi: "Đồng bộ Google Calendar",
                en: "Google Calendar sync",
            },
        ],
    },
    PlanInfo {
        id: "pro",
        name: Localized {
            vi: "Chuyên nghiệp",
            en: "Pro",
        },
        price_monthly: 199_000,
        price_yearly: 1_990_000,
        popular: false,
        features: &[
            Localized {
                vi: "Tất cả tính năng Basic",
                en: "All Basic features",
            },
            Localized {
                vi: "AI phân tích học tập",
                en: "AI study analysis",
            },
            Localized {
                vi: "Tư vấn 1-1",
                en: "1-on-1 consultation",
            },
            Localized {
                vi: "Ưu tiên hỗ trợ",
                en: "Priority support",
            },
        ],
    },
    PlanInfo {
        id: "team",
        name: Localized {
            vi: "Nhóm",
            en: "Team",
        },
        price_monthly: 499_000,
        price_yearly: 4_990_000,
        popular: false,
        features: &[
            Localized {
                vi: "Tất cả tính năng Pro",
                en: "All Pro features",
            },
            Localized {
                vi: "Quản lý nhóm học tập",
                en: "Study group management",
            },
            Localized {
                vi: "Dashboard thống kê",
                en: "Analytics dashboard",
            },
            Localized {
                vi: "Hỗ trợ 24/7",
                en: "24/7 support",
            },
        ],
    },
];

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: Localized {
            vi: "Làm sao để đăng ký dịch vụ?",
            en: "How to register for services?",
        },
        answer: Localized {
            vi: "Bạn có thể đăng ký qua trang Order, chọn gói phù hợp và điền thông tin. Chúng tôi sẽ liên hệ lại trong 24h.",
            en: "You can register through the Order page, choose a suitable plan and fill in information. We will contact you within 24 hours.",
        },
    },
    FaqEntry {
        question: Localized {
            vi: "Có miễn phí không?",
            en: "Is it free?",
        },
        answer: Localized {
            vi: "Có! Chúng tôi có gói Free với các tính năng cơ bản. Bạn có thể nâng cấp lên các gói trả phí để có thêm nhiều tính năng.",
            en: "Yes! We have a Free plan with basic features. You can upgrade to paid plans for more features.",
        },
    },
    FaqEntry {
        question: Localized {
            vi: "Thanh toán như thế nào?",
            en: "How to pay?",
        },
        answer: Localized {
            vi: "Chúng tôi hỗ trợ chuyển khoản ngân hàng, ví điện tử và thẻ tín dụng. Thanh toán an toàn 100%.",
            en: "We support bank transfer, e-wallets and credit cards. 100% secure payment.",
        },
    },
    FaqEntry {
        question: Localized {
            vi: "Làm sao để hủy đăng ký?",
            en: "How to cancel subscription?",
        },
        answer: Localized {
            vi: "Bạn có thể hủy đăng ký bất cứ lúc nào qua email hoặc liên hệ support. Không có phí hủy.",
            en: "You can cancel anytime via email or contact support. No cancellation fees.",
        },
    },
    FaqEntry {
        question: Localized {
            vi: "Có chính sách hoàn tiền không?",
            en: "Is there a refund policy?",
        },
        answer: Localized {
            vi: "Có! Nếu không hài lòng trong 7 ngày đầu, chúng tôi sẽ hoàn tiền 100%.",
            en: "Yes! If not satisfied within the first 7 days, we will refund 100%.",
        },
    },
];

const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        slug: "5-meo-quan-ly-thoi-gian-hieu-qua",
        author: "StudyOrder Team",
        published_at: "2025-08-12",
        title: Localized {
            vi: "5 Mẹo quản lý thời gian hiệu quả cho sinh viên",
            en: "5 Effective Time Management Tips for Students",
        },
        excerpt: Localized {
            vi: "Khám phá những phương pháp đã được kiểm chứng giúp sinh viên tối ưu hóa thời gian học tập và nghỉ ngơi.",
            en: "Discover proven methods that help students optimize study and rest time.",
        },
    },
    BlogPost {
        id: 2,
        slug: "cach-su-dung-google-calendar",
        author: "Minh Anh",
        published_at: "2025-08-05",
        title: Localized {
            vi: "Cách sử dụng Google Calendar để không bao giờ quên deadline",
            en: "How to Use Google Calendar to Never Miss Deadlines",
        },
        excerpt: Localized {
            vi: "Hướng dẫn chi tiết cách thiết lập và sử dụng Google Calendar một cách thông minh.",
            en: "Detailed guide on how to set up and use Google Calendar smartly.",
        },
    },
    BlogPost {
        id: 3,
        slug: "meo-on-thi-mua-thi",
        author: "Thảo Nguyên",
        published_at: "2025-07-28",
        title: Localized {
            vi: "Mẹo ôn thi hiệu quả trong mùa thi",
            en: "Effective Exam Preparation Tips",
        },
        excerpt: Localized {
            vi: "Những phương pháp ôn tập đã được chứng minh hiệu quả cho mùa thi căng thẳng.",
            en: "Proven study methods for the stressful exam season.",
        },
    },
];

pub fn services() -> &'static [ServiceInfo] {
    SERVICES
}

pub fn plans() -> &'static [PlanInfo] {
    PLANS
}

pub fn faq() -> &'static [FaqEntry] {
    FAQ
}

pub fn blog_posts() -> &'static [BlogPost] {
    BLOG_POSTS
}

pub fn get_service(id: &str) -> Option<&'static ServiceInfo> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn get_plan(id: &str) -> Option<&'static PlanInfo> {
    PLANS.iter().find(|p| p.id == id)
}

pub fn blog_post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}

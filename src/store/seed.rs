//! Seed data set — stands in for a backend until one exists.
//!
//! Discount dates are anchored to today so every derived status
//! (active, upcoming, expired, draft) is represented.

use chrono::{Duration, NaiveDate, Utc};

use crate::models::branch::{Branch, BranchStatus};
use crate::models::discount::Discount;
use crate::models::notification::{Notification, NotificationType};
use crate::models::profile::{MerchantProfile, SocialLinks};

pub struct SeedData {
    pub discounts: Vec<Discount>,
    pub branches: Vec<Branch>,
    pub notifications: Vec<Notification>,
    pub profile: MerchantProfile,
}

fn day(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

pub fn seed_data() -> SeedData {
    let branches = vec![
        Branch {
            id: "b1".to_string(),
            name: "Nizami Filialı".to_string(),
            address: "Nizami küç. 203, Bakı".to_string(),
            phone: "+994 50 123 45 67".to_string(),
            lat: 40.3791,
            lng: 49.8468,
            status: BranchStatus::Active,
        },
        Branch {
            id: "b2".to_string(),
            name: "28 May Filialı".to_string(),
            address: "28 May küç. 12, Bakı".to_string(),
            phone: "+994 50 234 56 78".to_string(),
            lat: 40.3793,
            lng: 49.8482,
            status: BranchStatus::Active,
        },
        Branch {
            id: "b3".to_string(),
            name: "Gənclik Filialı".to_string(),
            address: "Fətəli xan Xoyski pr. 38, Bakı".to_string(),
            phone: "+994 55 345 67 89".to_string(),
            lat: 40.4009,
            lng: 49.8519,
            status: BranchStatus::Active,
        },
        Branch {
            id: "b4".to_string(),
            name: "Sumqayıt Filialı".to_string(),
            address: "Sülh küç. 1, Sumqayıt".to_string(),
            phone: "+994 55 456 78 90".to_string(),
            lat: 40.5897,
            lng: 49.6686,
            status: BranchStatus::Inactive,
        },
    ];

    let discounts = vec![
        Discount {
            id: "d1".to_string(),
            title: "Yay Kolleksiyasına 50% Endirim".to_string(),
            description: "Bütün yay kolleksiyası məhsullarına böyük endirim.".to_string(),
            category: "Geyim".to_string(),
            discount_percent: 50,
            start_date: day(-10),
            end_date: day(10),
            branches: vec!["b1".to_string(), "b2".to_string()],
            is_draft: false,
            views: 1250,
            favorites: 89,
            nearby_clicks: 45,
            image: "/images/discounts/summer.jpg".to_string(),
        },
        Discount {
            id: "d2".to_string(),
            title: "Səhər Menyusuna 30% Endirim".to_string(),
            description: "Hər gün saat 12-yə qədər səhər menyusu endirimli.".to_string(),
            category: "Yemək və İçki".to_string(),
            discount_percent: 30,
            start_date: day(-30),
            end_date: day(3),
            branches: vec!["b1".to_string(), "b3".to_string()],
            is_draft: false,
            views: 844,
            favorites: 56,
            nearby_clicks: 31,
            image: "/images/discounts/breakfast.jpg".to_string(),
        },
        Discount {
            id: "d3".to_string(),
            title: "Qulaqlıqlara 20% Endirim".to_string(),
            description: "Seçilmiş qulaqlıq modellərində payız kampaniyası.".to_string(),
            category: "Elektronika".to_string(),
            discount_percent: 20,
            start_date: day(5),
            end_date: day(25),
            branches: vec!["b2".to_string()],
            is_draft: false,
            views: 102,
            favorites: 12,
            nearby_clicks: 4,
            image: "/images/discounts/headphones.jpg".to_string(),
        },
        Discount {
            id: "d4".to_string(),
            title: "Qış Sezonu Bağlanışı".to_string(),
            description: "Qış məhsullarının son satışı.".to_string(),
            category: "Geyim".to_string(),
            discount_percent: 70,
            start_date: day(-60),
            end_date: day(-20),
            branches: vec!["b1".to_string(), "b2".to_string(), "b3".to_string()],
            is_draft: false,
            views: 3410,
            favorites: 204,
            nearby_clicks: 118,
            image: "/images/discounts/winter.jpg".to_string(),
        },
        Discount {
            id: "d5".to_string(),
            title: "Üzvlük Kartına Bonus".to_string(),
            description: "Üzvlük kartı sahibləri üçün hazırlanan kampaniya.".to_string(),
            category: "Əyləncə".to_string(),
            discount_percent: 15,
            start_date: day(1),
            end_date: day(30),
            branches: vec![],
            is_draft: true,
            views: 0,
            favorites: 0,
            nearby_clicks: 0,
            image: "/images/discounts/membership.jpg".to_string(),
        },
    ];

    let now = Utc::now();
    let notifications = vec![
        Notification {
            id: "n1".to_string(),
            kind: NotificationType::Success,
            title: "Endirim təsdiqləndi".to_string(),
            message: "\"Yay Kolleksiyasına 50% Endirim\" kampaniyanız dərc olundu.".to_string(),
            created_at: now - Duration::hours(2),
            is_read: false,
        },
        Notification {
            id: "n2".to_string(),
            kind: NotificationType::Warning,
            title: "Endirim bitmək üzrədir".to_string(),
            message: "\"Səhər Menyusuna 30% Endirim\" 3 gün sonra bitir.".to_string(),
            created_at: now - Duration::hours(6),
            is_read: false,
        },
        Notification {
            id: "n3".to_string(),
            kind: NotificationType::Info,
            title: "Yeni funksiya".to_string(),
            message: "Filiallar artıq xəritədə göstərilir.".to_string(),
            created_at: now - Duration::days(1),
            is_read: false,
        },
        Notification {
            id: "n4".to_string(),
            kind: NotificationType::Error,
            title: "Şəkil yüklənmədi".to_string(),
            message: "Endirim şəkli ölçü limitini aşır (max 2MB).".to_string(),
            created_at: now - Duration::days(2),
            is_read: true,
        },
        Notification {
            id: "n5".to_string(),
            kind: NotificationType::Info,
            title: "Həftəlik hesabat hazırdır".to_string(),
            message: "Ötən həftənin baxış statistikası profilinizdədir.".to_string(),
            created_at: now - Duration::days(4),
            is_read: true,
        },
    ];

    let profile = MerchantProfile {
        brand_name: "Araz Market".to_string(),
        description: "Şəhər üzrə gündəlik alış-veriş məhsulları.".to_string(),
        category: "Yemək və İçki".to_string(),
        email: "info@arazmarket.az".to_string(),
        phone: "+994 12 345 67 89".to_string(),
        website: "https://arazmarket.az".to_string(),
        social_links: SocialLinks {
            facebook: "https://facebook.com/arazmarket".to_string(),
            instagram: "https://instagram.com/arazmarket".to_string(),
            twitter: String::new(),
        },
        logo: "/images/logo.png".to_string(),
    };

    SeedData {
        discounts,
        branches,
        notifications,
        profile,
    }
}

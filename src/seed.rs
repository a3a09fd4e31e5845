// src/seed.rs
//! Listings the store starts with.

use chrono::NaiveDate;

use crate::domain::{Agent, Listing, ListingId, TransactionType};

pub const AGENT_NAME: &str = "김부동산";
pub const AGENT_PHONE: &str = "010-1234-5678";
pub const AGENT_COMPANY: &str = "집다부동산";

pub fn default_agent() -> Agent {
    Agent {
        name: AGENT_NAME.into(),
        phone: AGENT_PHONE.into(),
        company: AGENT_COMPANY.into(),
    }
}

struct Seed {
    id: ListingId,
    title: &'static str,
    address: &'static str,
    district: &'static str,
    property_type: &'static str,
    sale_type: TransactionType,
    price: i64,
    monthly_rent: i64,
    area: f64,
    rooms: u32,
    bathrooms: u32,
    floor: (i32, i32),
    build_year: i32,
    options: &'static [&'static str],
    description: &'static str,
    coords: (f64, f64),
    premium: bool,
    views: u64,
    created_at: (i32, u32, u32),
}

impl Seed {
    fn into_listing(self) -> Option<Listing> {
        let (y, m, d) = self.created_at;
        Some(Listing {
            id: self.id,
            title: self.title.into(),
            address: self.address.into(),
            district: self.district.into(),
            property_type: self.property_type.into(),
            sale_type: self.sale_type,
            price: self.price,
            monthly_rent: self.monthly_rent,
            area: self.area,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            floor: self.floor.0,
            total_floors: self.floor.1,
            build_year: self.build_year,
            options: self.options.iter().map(|o| o.to_string()).collect(),
            description: self.description.into(),
            lat: self.coords.0,
            lng: self.coords.1,
            image: format!("https://picsum.photos/seed/listing{}/400/300", self.id),
            agent: default_agent(),
            premium: self.premium,
            views: self.views,
            created_at: NaiveDate::from_ymd_opt(y, m, d)?,
        })
    }
}

const FULL_OPTIONS: &[&str] = &["에어컨", "냉장고", "세탁기", "인덕션", "붙박이장"];
const BASIC_OPTIONS: &[&str] = &["에어컨", "냉장고", "세탁기"];
const APT_OPTIONS: &[&str] = &["시스템에어컨", "식기세척기", "주차 2대", "커뮤니티센터"];

pub fn seed_listings() -> Vec<Listing> {
    use TransactionType::*;

    let seeds = [
        Seed {
            id: 1,
            title: "판교역 도보 5분 풀옵션 원룸",
            address: "경기도 성남시 분당구 백현동 541",
            district: "성남시 분당구",
            property_type: "원룸",
            sale_type: MonthlyRent,
            price: 1000,
            monthly_rent: 65,
            area: 23.1,
            rooms: 1,
            bathrooms: 1,
            floor: (5, 12),
            build_year: 2019,
            options: FULL_OPTIONS,
            description: "신분당선 판교역 도보 5분, 채광 좋은 남향 원룸입니다.",
            coords: (37.3947, 127.1112),
            premium: true,
            views: 342,
            created_at: (2024, 11, 20),
        },
        Seed {
            id: 2,
            title: "역삼동 신축 오피스텔",
            address: "서울시 강남구 역삼동 823-4",
            district: "강남구",
            property_type: "오피스텔",
            sale_type: LeaseDeposit,
            price: 25_000,
            monthly_rent: 0,
            area: 33.5,
            rooms: 1,
            bathrooms: 1,
            floor: (9, 18),
            build_year: 2022,
            options: BASIC_OPTIONS,
            description: "강남역과 역삼역 사이, 보안 좋은 신축 오피스텔.",
            coords: (37.4989, 127.0331),
            premium: false,
            views: 128,
            created_at: (2024, 11, 18),
        },
        Seed {
            id: 3,
            title: "반포 한강뷰 아파트",
            address: "서울시 서초구 반포동 1-1",
            district: "서초구",
            property_type: "아파트",
            sale_type: Sale,
            price: 285_000,
            monthly_rent: 0,
            area: 84.9,
            rooms: 3,
            bathrooms: 2,
            floor: (21, 35),
            build_year: 2016,
            options: APT_OPTIONS,
            description: "한강 조망이 가능한 대단지 아파트, 학군 우수.",
            coords: (37.5079, 126.9957),
            premium: true,
            views: 915,
            created_at: (2024, 11, 15),
        },
        Seed {
            id: 4,
            title: "정자동 카페거리 투룸",
            address: "경기도 성남시 분당구 정자동 160-2",
            district: "성남시 분당구",
            property_type: "투룸",
            sale_type: LeaseDeposit,
            price: 32_000,
            monthly_rent: 0,
            area: 49.6,
            rooms: 2,
            bathrooms: 1,
            floor: (3, 7),
            build_year: 2015,
            options: BASIC_OPTIONS,
            description: "정자역 도보 7분, 조용한 주거 단지 내 투룸.",
            coords: (37.3660, 127.1085),
            premium: false,
            views: 76,
            created_at: (2024, 11, 12),
        },
        Seed {
            id: 5,
            title: "삼성동 코엑스 인근 오피스텔",
            address: "서울시 강남구 삼성동 159",
            district: "강남구",
            property_type: "오피스텔",
            sale_type: MonthlyRent,
            price: 2000,
            monthly_rent: 95,
            area: 29.7,
            rooms: 1,
            bathrooms: 1,
            floor: (14, 20),
            build_year: 2020,
            options: FULL_OPTIONS,
            description: "코엑스, 봉은사역 인접. 업무지구 출퇴근 최적.",
            coords: (37.5116, 127.0595),
            premium: true,
            views: 254,
            created_at: (2024, 11, 10),
        },
        Seed {
            id: 6,
            title: "서초동 법조타운 투룸",
            address: "서울시 서초구 서초동 1701",
            district: "서초구",
            property_type: "투룸",
            sale_type: MonthlyRent,
            price: 3000,
            monthly_rent: 78,
            area: 42.0,
            rooms: 2,
            bathrooms: 1,
            floor: (4, 6),
            build_year: 2012,
            options: BASIC_OPTIONS,
            description: "교대역 도보 3분, 리모델링 완료된 투룸.",
            coords: (37.4934, 127.0145),
            premium: false,
            views: 63,
            created_at: (2024, 11, 8),
        },
        Seed {
            id: 7,
            title: "판교 테크노밸리 아파트",
            address: "경기도 성남시 분당구 삼평동 680",
            district: "성남시 분당구",
            property_type: "아파트",
            sale_type: Sale,
            price: 135_000,
            monthly_rent: 0,
            area: 101.3,
            rooms: 3,
            bathrooms: 2,
            floor: (11, 25),
            build_year: 2011,
            options: APT_OPTIONS,
            description: "판교 테크노밸리 직주근접, 초품아 단지.",
            coords: (37.4020, 127.1087),
            premium: false,
            views: 488,
            created_at: (2024, 11, 5),
        },
        Seed {
            id: 8,
            title: "논현동 학동역 원룸",
            address: "서울시 강남구 논현동 110-3",
            district: "강남구",
            property_type: "원룸",
            sale_type: MonthlyRent,
            price: 500,
            monthly_rent: 48,
            area: 19.8,
            rooms: 1,
            bathrooms: 1,
            floor: (2, 5),
            build_year: 2008,
            options: BASIC_OPTIONS,
            description: "학동역 도보 2분, 가성비 좋은 원룸.",
            coords: (37.5142, 127.0317),
            premium: false,
            views: 39,
            created_at: (2024, 11, 3),
        },
        Seed {
            id: 9,
            title: "방배동 전원주택형 빌라",
            address: "서울시 서초구 방배동 912-7",
            district: "서초구",
            property_type: "빌라",
            sale_type: LeaseDeposit,
            price: 55_000,
            monthly_rent: 0,
            area: 72.4,
            rooms: 3,
            bathrooms: 2,
            floor: (2, 4),
            build_year: 2014,
            options: BASIC_OPTIONS,
            description: "서리풀공원 인접, 테라스가 있는 넓은 빌라.",
            coords: (37.4816, 126.9975),
            premium: true,
            views: 147,
            created_at: (2024, 10, 30),
        },
        Seed {
            id: 10,
            title: "서현역 역세권 오피스텔",
            address: "경기도 성남시 분당구 서현동 263",
            district: "성남시 분당구",
            property_type: "오피스텔",
            sale_type: Sale,
            price: 42_000,
            monthly_rent: 0,
            area: 38.2,
            rooms: 1,
            bathrooms: 1,
            floor: (8, 15),
            build_year: 2018,
            options: FULL_OPTIONS,
            description: "서현역 AK플라자 바로 앞, 투자용으로도 좋은 매물.",
            coords: (37.3850, 127.1234),
            premium: false,
            views: 210,
            created_at: (2024, 10, 27),
        },
    ];

    seeds
        .into_iter()
        .filter_map(|seed| {
            let (id, created_at) = (seed.id, seed.created_at);
            let listing = seed.into_listing();
            if listing.is_none() {
                tracing::warn!(listing_id = id, ?created_at, "skipping seed listing with invalid date");
            }
            listing
        })
        .collect()
}

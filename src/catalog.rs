//! Fixed catalog records served by the mock API. No storage behind these.

use crate::{Category, Product};
use std::collections::HashMap;

fn specs(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "iPhone 15 Pro Max 256GB".to_string(),
            price: 34_990_000,
            original_price: Some(36_990_000),
            discount: Some(5),
            image: "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg".to_string(),
            images: vec![
                "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg".to_string(),
            ],
            description: "iPhone 15 Pro Max với chip A17 Pro, camera 48MP".to_string(),
            category: "dien-thoai".to_string(),
            brand: "Apple".to_string(),
            rating: 4.8,
            review_count: 2847,
            sold: 1250,
            stock: 50,
            tags: vec!["hot".to_string(), "new".to_string()],
            specifications: specs(&[
                ("Màn hình", "6.7 inch Super Retina XDR"),
                ("Camera", "48MP + 12MP + 12MP"),
                ("Chip", "A17 Pro"),
                ("RAM", "8GB"),
                ("Bộ nhớ", "256GB"),
            ]),
        },
        Product {
            id: "2".to_string(),
            name: "Samsung Galaxy S24 Ultra 512GB".to_string(),
            price: 31_990_000,
            original_price: Some(33_990_000),
            discount: Some(6),
            image: "https://images.pexels.com/photos/404280/pexels-photo-404280.jpeg".to_string(),
            images: vec![
                "https://images.pexels.com/photos/404280/pexels-photo-404280.jpeg".to_string(),
            ],
            description: "Galaxy S24 Ultra với S Pen tích hợp".to_string(),
            category: "dien-thoai".to_string(),
            brand: "Samsung".to_string(),
            rating: 4.7,
            review_count: 1893,
            sold: 890,
            stock: 35,
            tags: vec!["hot".to_string()],
            specifications: specs(&[
                ("Màn hình", "6.8 inch Dynamic AMOLED 2X"),
                ("Camera", "200MP + 50MP + 12MP + 10MP"),
                ("Chip", "Snapdragon 8 Gen 3"),
                ("RAM", "12GB"),
                ("Bộ nhớ", "512GB"),
            ]),
        },
    ]
}

pub fn categories() -> Vec<Category> {
    let entries = [
        ("1", "Điện Thoại - Máy Tính Bảng", "Smartphone", "dien-thoai"),
        ("2", "Điện Tử", "Laptop", "dien-tu"),
        ("3", "Thời Trang Nam", "ShirtIcon", "thoi-trang-nam"),
        ("4", "Thời Trang Nữ", "Shirt", "thoi-trang-nu"),
        ("5", "Mẹ & Bé", "Baby", "me-be"),
        ("6", "Nhà Cửa & Đời Sống", "Home", "nha-cua"),
        ("7", "Sách & Tiểu Thuyết", "Book", "sach"),
        ("8", "Thể Thao & Du Lịch", "Bike", "the-thao"),
    ];
    entries
        .into_iter()
        .map(|(id, name, icon, slug)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            slug: slug.to_string(),
            parent_id: None,
        })
        .collect()
}

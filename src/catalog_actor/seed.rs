//! Demo catalog loaded at startup when `seed_demo_catalog` is enabled.
//!
//! Seeded in order, so these get ids 1 through 12 and list in this order.

use crate::model::ProductDraft;

pub fn demo_catalog() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new(
            "Starlight Silver Laptop",
            "Electronics",
            95999,
            "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?q=80&w=400&h=300&auto=format&fit=crop",
            "A sleek, high-performance laptop for professionals, in a stunning silver finish.",
        ),
        ProductDraft::new(
            "Ergonomic Wireless Mouse",
            "Electronics",
            2499,
            "https://www.netcombrunei.com/media/catalog/product/cache/f9c79f757b685538d4168da37b3725fb/r/a/razer-706.jpg",
            "A comfortable and responsive ergonomic wireless mouse.",
        ),
        ProductDraft::new(
            "RGB Mechanical Keyboard",
            "Electronics",
            7999,
            "https://images.unsplash.com/photo-1618384887929-16ec33fab9ef?q=80&w=400&h=300&auto=format&fit=crop",
            "A vibrant RGB mechanical keyboard for an immersive gaming experience.",
        ),
        ProductDraft::new(
            "Ergonomic Office Chair",
            "Furniture",
            14999,
            "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?q=80&w=400&h=300&auto=format&fit=crop",
            "A stylish and comfortable ergonomic office chair with lumbar support.",
        ),
        ProductDraft::new(
            "Adjustable Standing Desk",
            "Furniture",
            29999,
            "https://hulalahome.com/cdn/shop/files/Z6DKGR0517-ACR_1_77816155-e9b7-460b-b3e6-a61d619cd130.jpg?v=1750839672&width=1946",
            "An adjustable height standing desk for a healthier workspace.",
        ),
        ProductDraft::new(
            "Studio Headphones",
            "Electronics",
            19999,
            "https://images.unsplash.com/photo-1618366712010-f4ae9c647dcb?q=80&w=400&h=300&auto=format&fit=crop",
            "Over-ear noise-cancelling headphones for an immersive sound experience.",
        ),
        ProductDraft::new(
            "Espresso Coffee Machine",
            "Appliances",
            4999,
            "https://vassilias.gr/wp-content/uploads/2024/10/R-98041h2500x2500-500x500.jpg",
            "Brews the perfect cup of espresso or coffee every morning.",
        ),
        ProductDraft::new(
            "Fitness Smart Watch",
            "Electronics",
            17999,
            "https://www.androidauthority.com/wp-content/uploads/2019/09/samsung-galaxy-watch-active-2-review-watch-face-clock-face-5-1918w-1080h.jpg.webp",
            "Track your fitness and stay connected on the go with this smart watch.",
        ),
        ProductDraft::new(
            "Industrial Bookshelf",
            "Furniture",
            8999,
            "https://thetimberguy.com/cdn/shop/files/Industrial-style-bookcase-bookshelf-Display-rack-in-solid-wood-Metal-combination_1200x.png?v=1713377507",
            "A sleek and sturdy industrial-style bookshelf for any modern home.",
        ),
        ProductDraft::new(
            "Eco-Friendly Yoga Mat",
            "Sports",
            1499,
            "https://images-cdn.ubuy.co.in/633b5eab3142b127f32c1e44-iuga-eco-friendly-yoga-mat-with.jpg",
            "A non-slip, eco-friendly yoga mat for your daily practice.",
        ),
        ProductDraft::new(
            "High-Speed Blender",
            "Appliances",
            5999,
            "https://www.balzano.in/s/5ffef0f4e87dbbaa9bac7da0/66a23f63d13c590024303910/b0d8ft6tqj-main.jpeg",
            "A powerful high-speed blender for smoothies, soups, and more.",
        ),
        ProductDraft::new(
            "Trail Running Shoes",
            "Sports",
            6999,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=400&h=300&auto=format&fit=crop",
            "Lightweight and comfortable trail running shoes for any terrain.",
        ),
    ]
}

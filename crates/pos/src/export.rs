//! Printable document rendering.
//!
//! Pure functions of already-computed snapshots: an invoice from an
//! [`Order`], a membership card from a [`LoyaltyProfile`]. The output is a
//! standalone right-to-left HTML document the caller can write to a file or
//! hand to a browser for printing. No state is read or mutated here.

use khales_core::display_amount;

use crate::models::{LoyaltyProfile, Order, PaymentMethod};

/// Render a standalone printable invoice for an order.
///
/// `payment_method` is shown when known (it is not part of the immutable
/// order record).
#[must_use]
pub fn invoice_html(order: &Order, payment_method: Option<PaymentMethod>) -> String {
    let items_html: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "<tr style=\"border-bottom: 1px solid #eee;\">\
                 <td style=\"padding: 15px 0;\">\
                 <div style=\"font-weight: 900;\">{}</div>\
                 <div style=\"font-size: 10px; color: #888;\">{} | {}</div>\
                 </td>\
                 <td style=\"padding: 15px 0; text-align: center;\">{}</td>\
                 <td style=\"padding: 15px 0; text-align: left; font-weight: 700;\">{}</td>\
                 </tr>",
                item.name,
                item.selected_size,
                item.selected_color,
                item.quantity,
                display_amount(item.line_total()),
            )
        })
        .collect();

    let payment_html = payment_method.map_or_else(String::new, |method| {
        format!("<p><strong>طريقة الدفع:</strong> {}</p>", method.label())
    });

    format!(
        "<html dir=\"rtl\">\
         <head>\
         <title>فاتورة خالص - {order_number}</title>\
         <style>\
         body {{ font-family: 'Cairo', sans-serif; padding: 50px; color: #2c3e50; line-height: 1.6; }}\
         .header {{ text-align: center; border-bottom: 3px solid #b33951; padding-bottom: 30px; margin-bottom: 40px; }}\
         .brand {{ font-size: 50px; font-weight: 900; color: #b33951; margin: 0; }}\
         table {{ width: 100%; border-collapse: collapse; margin-bottom: 40px; }}\
         th {{ text-align: right; border-bottom: 2px solid #2c3e50; padding: 10px 0; font-weight: 900; }}\
         .total-row {{ display: flex; justify-content: space-between; font-size: 22px; font-weight: 900; color: #b33951; }}\
         </style>\
         </head>\
         <body>\
         <div class=\"header\"><h1 class=\"brand\">خالص</h1>\
         <p style=\"letter-spacing: 5px; font-weight: 700;\">KHALES FASHION MANAGEMENT</p></div>\
         <div class=\"info\">\
         <p><strong>رقم الفاتورة:</strong> {order_number}</p>\
         <p><strong>التاريخ:</strong> {date}</p>\
         <p><strong>الزبونة:</strong> {customer}</p>\
         {payment_html}\
         </div>\
         <table>\
         <thead><tr><th>المنتج</th><th style=\"text-align: center;\">الكمية</th><th style=\"text-align: left;\">الإجمالي</th></tr></thead>\
         <tbody>{items_html}</tbody>\
         </table>\
         <div class=\"total-row\"><span>الإجمالي النهائي:</span><span>{total}</span></div>\
         <p style=\"text-align: center; margin-top: 50px; font-size: 12px; color: #aaa;\">شكراً لثقتكم بمحل خالص للأزياء النسائية</p>\
         </body>\
         </html>",
        order_number = order.order_number,
        date = order.date.format("%Y-%m-%d"),
        customer = order.customer_name,
        total = display_amount(order.total),
    )
}

/// Render a standalone printable membership card.
#[must_use]
pub fn membership_card_html(profile: &LoyaltyProfile) -> String {
    let member_since = profile.member_since.map_or_else(String::new, |date| {
        format!("<p>عضو منذ: {}</p>", date.format("%Y-%m-%d"))
    });

    format!(
        "<html dir=\"rtl\">\
         <head><title>بطاقة عضوية خالص</title></head>\
         <body style=\"font-family: 'Cairo', sans-serif;\">\
         <div style=\"border: 2px solid #c9a063; border-radius: 20px; padding: 30px; max-width: 400px;\">\
         <h1 style=\"color: #b33951;\">خالص</h1>\
         <h2>{name}</h2>\
         <p>الفئة: {tier}</p>\
         <p>رقم البطاقة: {card_number}</p>\
         <p>النقاط: {points}</p>\
         {member_since}\
         <p style=\"font-size: 10px; color: #888;\">QR: {qr}</p>\
         </div>\
         </body>\
         </html>",
        name = profile.customer_name,
        tier = profile.tier.label(),
        card_number = profile.card_number,
        points = profile.points,
        qr = profile.qr_value,
    )
}

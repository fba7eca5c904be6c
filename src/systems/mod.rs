mod character;
